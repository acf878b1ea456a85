use crate::models::{ListingType, Property};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a listing price for display.
///
/// A missing or zero price means the agent did not publish one, so the card
/// shows "Price on application". Otherwise the price renders as whole euro
/// with thousands separators, followed by the price period when the listing
/// has one ("€1,850 per month").
pub fn format_price(price_eur: Option<f64>, price_period: Option<&str>) -> String {
    let price = match price_eur {
        Some(p) if p > 0.0 => p,
        _ => return "Price on application".to_string(),
    };

    let formatted = format!("€{}", group_thousands(price.round() as u64));
    match price_period {
        Some(period) if !period.is_empty() => format!("{formatted} {period}"),
        _ => formatted,
    }
}

/// Format a listing date for display, degrading to "N/A" when the backend
/// sent nothing or something unparsable.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// The backend stores dates as ISO strings, with or without a timezone
/// offset depending on where the scraper picked them up.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = value / 1000;
        if rest == 0 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value = rest;
    }
    groups.reverse();
    groups.join(",")
}

/// Render one property as a multi-line text card.
///
/// Optional fields appear only when the backend sent them; a bedroom count
/// of zero is still a value and renders as "0 bed".
pub fn render_card(property: &Property) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} ({})", property.title, property.listing_type));
    lines.push(format!(
        "   {}",
        format_price(property.price_eur, property.price_period.as_deref())
    ));

    let details = detail_parts(property);
    if !details.is_empty() {
        lines.push(format!("   {}", details.join(" · ")));
    }

    if let Some(address) = &property.address_full {
        lines.push(format!("   {address}"));
    }
    lines.push(format!(
        "   Listed: {}",
        format_date(property.date_listed.as_deref())
    ));
    match &property.image_url {
        Some(image_url) => lines.push(format!("   Photo: {image_url}")),
        None => lines.push("   (no photo)".to_string()),
    }
    lines.push(format!("   {}", property.url));
    lines.join("\n")
}

fn detail_parts(property: &Property) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(bedrooms) = property.bedrooms {
        parts.push(format!("{bedrooms} bed"));
    }
    if let Some(bathrooms) = property.bathrooms {
        parts.push(format!("{bathrooms} bath"));
    }
    if let Some(size_sqm) = property.size_sqm {
        parts.push(format!("{} m²", format_number(size_sqm)));
    }
    if let Some(property_type) = &property.property_type {
        parts.push(property_type.clone());
    }
    parts
}

/// Print whole numbers without a decimal tail (72.0 -> "72").
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

/// The "Showing X of Y properties." line above the grid.
pub fn summary_line(shown: usize, total_count: u64) -> String {
    format!("Showing {shown} of {total_count} properties.")
}

/// Empty-state copy for a result page with zero records.
///
/// With no listing-type filter active the database itself is empty; with one
/// active the message blames the current filters instead.
pub fn empty_state_message(listing_type: Option<ListingType>) -> String {
    match listing_type {
        None => {
            "No properties found in the database. Try running the scraper to load some listings."
                .to_string()
        }
        Some(ListingType::Rent) => "No rental properties match your current filters.".to_string(),
        Some(ListingType::Sale) => "No sale properties match your current filters.".to_string(),
    }
}
