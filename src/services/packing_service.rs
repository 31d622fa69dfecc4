/// Kit every traveler takes regardless of destination, in issue order.
const BASE_ITEMS: [&str; 5] = [
    "Space Suit",
    "Oxygen Tanks",
    "Emergency Beacon",
    "Radiation Shield",
    "Gravity Boots",
];

pub struct PackingService;

impl PackingService {
    fn items_for_tag(tag: &str) -> &'static [&'static str] {
        match tag {
            "Has Water" => &["Diving Gear", "Water Purification Tablets"],
            "Cold" => &["Thermal Underwear", "Heat Packs"],
            "Hot" => &["Cooling Vest", "Sun Protection"],
            "Adventure" => &["Climbing Gear", "Energy Bars"],
            "Romantic" => &["Champagne", "Formal Wear"],
            _ => &[],
        }
    }

    /// Packing list for a destination's tags: the baseline kit, then per-tag
    /// additions in the destination's own tag order, deduplicated keeping the
    /// first occurrence. Tags without a mapping contribute nothing.
    pub fn generate(tags: &[String]) -> Vec<String> {
        let mut list: Vec<String> = BASE_ITEMS.iter().map(|item| item.to_string()).collect();
        for tag in tags {
            for item in Self::items_for_tag(tag) {
                if !list.iter().any(|existing| existing == item) {
                    list.push(item.to_string());
                }
            }
        }
        list
    }
}
