//! Categorical domains exposed by the input form.
//!
//! Every tag is also the name of the indicator column the model was trained
//! with, so a selection maps to its column without any translation.

#[derive(Debug, PartialEq, Eq)]
pub struct CategoricalDomain {
    /// Field name used by the form and the JSON API.
    pub name: &'static str,
    pub label: &'static str,
    /// Column prefix shared by all tags of the domain.
    pub prefix: &'static str,
    pub tags: &'static [&'static str],
}

impl CategoricalDomain {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Indicator columns for `selected`: 1.0 on the selected tag, 0.0 on its siblings.
    pub fn one_hot<'a>(&'a self, selected: &'a str) -> impl Iterator<Item = (&'static str, f64)> + 'a {
        self.tags
            .iter()
            .map(move |tag| (*tag, if *tag == selected { 1.0 } else { 0.0 }))
    }

    /// Human readable option text, e.g. `brand_land-rover` -> `land-rover`.
    pub fn display_name<'t>(&self, tag: &'t str) -> &'t str {
        tag.strip_prefix(self.prefix).unwrap_or(tag)
    }

    pub fn default_tag(&self) -> &'static str {
        self.tags[0]
    }
}

pub static BRAND: CategoricalDomain = CategoricalDomain {
    name: "brand",
    label: "Select Brand:",
    prefix: "brand_",
    tags: &[
        "brand_alfa-romeo",
        "brand_audi",
        "brand_bmw",
        "brand_cadillac",
        "brand_chevrolet",
        "brand_chrysler",
        "brand_citroen",
        "brand_dodge",
        "brand_ferrari",
        "brand_fiat",
        "brand_ford",
        "brand_honda",
        "brand_hyundai",
        "brand_infiniti",
        "brand_isuzu",
        "brand_jaguar",
        "brand_jeep",
        "brand_kia",
        "brand_lada",
        "brand_lamborghini",
        "brand_lancia",
        "brand_land-rover",
        "brand_maserati",
        "brand_mazda",
    ],
};

pub static COLOR: CategoricalDomain = CategoricalDomain {
    name: "color",
    label: "Select Color:",
    prefix: "color_",
    tags: &[
        "color_black",
        "color_blue",
        "color_bronze",
        "color_brown",
        "color_gold",
        "color_green",
        "color_grey",
        "color_orange",
        "color_red",
        "color_silver",
        "color_violet",
        "color_white",
        "color_yellow",
    ],
};

pub static TRANSMISSION: CategoricalDomain = CategoricalDomain {
    name: "transmission",
    label: "Select Transmission Type:",
    prefix: "transmission_type_",
    tags: &[
        "transmission_type_Manual",
        "transmission_type_Automatic",
        "transmission_type_Semi-automatic",
        "transmission_type_Unknown",
    ],
};

pub static FUEL_TYPE: CategoricalDomain = CategoricalDomain {
    name: "fuel_type",
    label: "Select Fuel Type:",
    prefix: "fuel_type_",
    tags: &[
        "fuel_type_Diesel",
        "fuel_type_Petrol",
        "fuel_type_Hybrid",
        "fuel_type_Electric",
        "fuel_type_Ethanol",
        "fuel_type_Hydrogen",
        "fuel_type_LPG",
        "fuel_type_CNG",
        "fuel_type_Other",
    ],
};

pub static DOMAINS: [&CategoricalDomain; 4] = [&BRAND, &COLOR, &TRANSMISSION, &FUEL_TYPE];

/// Finds the domain a column belongs to, if any.
pub fn domain_of(column: &str) -> Option<&'static CategoricalDomain> {
    DOMAINS.iter().copied().find(|domain| domain.contains(column))
}
