use crate::features::{CarInput, CategoricalDomain, catalog};
use std::{collections::HashMap, fmt::Write, str::FromStr};

/// Message shown under the Predict button.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Price(String),
    Error(String),
}

pub struct PageView<'a> {
    pub input: &'a CarInput,
    pub load_error: Option<&'a str>,
    pub outcome: Option<&'a Outcome>,
}

struct NumberField {
    name: &'static str,
    label: &'static str,
    step: &'static str,
}

const NUMBER_FIELDS: [NumberField; 5] = [
    NumberField {
        name: "power_kw",
        label: "Power (kW):",
        step: "20",
    },
    NumberField {
        name: "power_ps",
        label: "Power (PS):",
        step: "20",
    },
    NumberField {
        name: "fuel_consumption_g_km",
        label: "Fuel Consumption (g/km):",
        step: "10",
    },
    NumberField {
        name: "mileage_in_km",
        label: "Mileage (in km):",
        step: "100",
    },
    NumberField {
        name: "car_age_years",
        label: "Car Age (Years):",
        step: "1",
    },
];

/// Reads submitted fields into a `CarInput`, keeping every value that parses.
///
/// Fields that are missing or unparseable keep their default and are reported
/// in the returned messages, so the form can be shown again with the user's
/// other entries intact.
pub fn parse_fields(fields: &HashMap<String, String>) -> (CarInput, Vec<String>) {
    let mut input = CarInput::default();
    let mut problems = Vec::new();

    read_number(fields, "power_kw", &mut input.power_kw, &mut problems);
    read_number(fields, "power_ps", &mut input.power_ps, &mut problems);
    read_number(
        fields,
        "fuel_consumption_g_km",
        &mut input.fuel_consumption_g_km,
        &mut problems,
    );
    read_number(fields, "mileage_in_km", &mut input.mileage_in_km, &mut problems);
    read_number(fields, "car_age_years", &mut input.car_age_years, &mut problems);

    for (domain, slot) in [
        (&catalog::BRAND, &mut input.brand),
        (&catalog::COLOR, &mut input.color),
        (&catalog::TRANSMISSION, &mut input.transmission),
        (&catalog::FUEL_TYPE, &mut input.fuel_type),
    ] {
        match fields.get(domain.name) {
            Some(tag) => *slot = tag.clone(),
            None => problems.push(format!("missing field {}", domain.name)),
        }
    }

    (input, problems)
}

fn read_number<T: FromStr>(
    fields: &HashMap<String, String>,
    name: &str,
    slot: &mut T,
    problems: &mut Vec<String>,
) {
    match fields.get(name).map(|raw| raw.trim()) {
        Some(raw) => match raw.parse() {
            Ok(value) => *slot = value,
            Err(_) => problems.push(format!("{}: '{}' is not a valid number", name, raw)),
        },
        None => problems.push(format!("missing field {}", name)),
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Car Price Prediction App</title>\n</head>\n<body>\n\
         <h1>Car Price Prediction App</h1>\n\
         <p>Enter the car details below to predict the price in Euros.</p>\n",
    );

    match view.load_error {
        Some(error) => {
            let _ = writeln!(
                html,
                "<p class=\"error\">Error loading model or feature names: {}</p>",
                escape_html(error)
            );
        }
        None => html.push_str("<p>Model and feature names loaded successfully!</p>\n"),
    }

    html.push_str("<form method=\"post\" action=\"/predict\">\n");

    let values = view.input.numeric_values();
    for (field, (_, value)) in NUMBER_FIELDS.iter().zip(values) {
        let _ = writeln!(
            html,
            "<label>{label} <input type=\"number\" name=\"{name}\" min=\"0\" step=\"{step}\" value=\"{value}\" required></label><br>",
            label = field.label,
            name = field.name,
            step = field.step,
            value = value,
        );
    }

    for domain in catalog::DOMAINS {
        let selected = view
            .input
            .selection(domain)
            .unwrap_or_else(|| domain.default_tag());
        render_select(&mut html, domain, selected);
    }

    let disabled = if view.load_error.is_some() { " disabled" } else { "" };
    let _ = writeln!(html, "<button type=\"submit\"{}>Predict</button>", disabled);
    html.push_str("</form>\n");

    match view.outcome {
        Some(Outcome::Price(formatted)) => {
            let _ = writeln!(
                html,
                "<p class=\"success\">The predicted price is {}</p>",
                escape_html(formatted)
            );
        }
        Some(Outcome::Error(message)) => {
            let _ = writeln!(
                html,
                "<p class=\"error\">Error making prediction: {}</p>",
                escape_html(message)
            );
        }
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_select(html: &mut String, domain: &CategoricalDomain, selected: &str) {
    let _ = writeln!(
        html,
        "<label>{} <select name=\"{}\">",
        domain.label, domain.name
    );
    for tag in domain.tags {
        let marker = if *tag == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(tag),
            marker,
            escape_html(domain.display_name(tag))
        );
    }
    html.push_str("</select></label><br>\n");
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
