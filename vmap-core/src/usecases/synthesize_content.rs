use crate::{
    util::text, LocationHint, OpeningHoursGateway, Phrase, PrettifyOptions, TranslationGateway,
};

use super::{
    opening_state::{evaluate_open_state, open_state_phrase, prettified_rules},
    prelude::*,
};

/// External info page about the places shown on the map.
pub const MORE_INFO_URL: &str = "https://www.vegan-in-halle.de/wp/leben/vegane-stadtkarte/";

/// Short hover text: symbol and name.
pub fn tooltip_content(place: &PlaceFeature) -> String {
    match &place.symbol {
        Some(symbol) => format!("{symbol} {}", place.name),
        None => place.name.clone(),
    }
}

/// Collaborators and regional context for popup synthesis.
#[derive(Debug)]
pub struct PopupContext<'a, G, T> {
    pub hours: &'a G,
    pub i18n: &'a T,
    pub country_code: &'a str,
    pub state: &'a str,
    pub locale: &'a str,
    pub now: Timestamp,
}

/// Long click text: an ordered block of optional sections.
///
/// The section order (header, cuisine, address, opening hours, contacts,
/// footer) is part of the observable contract. Every section except the
/// header is gated on field presence; an absent field never leaves a
/// dangling label or separator.
pub fn popup_content<G, T>(place: &PlaceFeature, ctx: &PopupContext<'_, G, T>) -> String
where
    G: OpeningHoursGateway,
    T: TranslationGateway,
{
    let sections = [
        Some(header_section(place)),
        cuisine_section(place),
        address_section(place),
        hours_section(place, ctx),
        contact_section(place),
        footer_section(place, ctx.i18n),
    ];
    sections.into_iter().flatten().collect()
}

fn flex_row(glyph: &str, content: &str) -> String {
    format!("<div class='popupflex-container'><div>{glyph}</div><div>{content}</div></div>")
}

fn link(href: &str, display: &str) -> String {
    format!("<a href='{href}' target='_blank' rel='noopener noreferrer'>{display}</a>")
}

fn header_section(place: &PlaceFeature) -> String {
    let mut section = String::from("<div class='mapPopupTitle'>");
    section.push_str(&tooltip_content(place));
    if let Some(osm) = &place.osm_ref {
        section.push_str(&link(&osm.permalink(), " *"));
    }
    section.push_str("</div><hr/>");
    section
}

fn cuisine_section(place: &PlaceFeature) -> Option<String> {
    place
        .cuisine
        .as_deref()
        .map(|cuisine| flex_row("👩‍🍳", &text::normalize_cuisine(cuisine)))
}

fn address_section(place: &PlaceFeature) -> Option<String> {
    let address = place.address.as_ref()?;
    let mut lines = String::new();
    if let Some(street) = &address.street {
        lines.push_str(street);
        lines.push_str("<br/>");
    }
    if let Some(postcode) = &address.postcode {
        lines.push_str(postcode);
        lines.push(' ');
    }
    if let Some(city) = &address.city {
        lines.push_str(city);
        lines.push(' ');
    }
    // The country is read but intentionally not displayed.
    let _ = &address.country;
    if lines.is_empty() {
        return None;
    }
    Some(flex_row("📍", &lines))
}

fn hours_section<G, T>(place: &PlaceFeature, ctx: &PopupContext<'_, G, T>) -> Option<String>
where
    G: OpeningHoursGateway,
    T: TranslationGateway,
{
    let spec = place.opening_hours.as_ref()?;
    let hint = LocationHint {
        pos: place.pos,
        country_code: ctx.country_code.to_string(),
        state: ctx.state.to_string(),
        locale: ctx.locale.to_string(),
    };
    let Some(evaluator) = ctx.hours.compile(spec, &hint) else {
        // Unparsable specification: opening hours are unavailable and the
        // whole section is omitted.
        log::debug!("Cannot evaluate opening hours of {}: {}", place.name, spec.as_str());
        return None;
    };
    let state = evaluate_open_state(&evaluator, ctx.now);
    let phrase = open_state_phrase(state, ctx.i18n);
    let options = PrettifyOptions {
        locale: ctx.locale.to_string(),
        ..Default::default()
    };
    let rules = prettified_rules(&evaluator, &options, ctx.i18n);
    Some(flex_row(
        "🕖",
        &format!("<span class='open_state_circle {state}'></span>{phrase}<br />{rules}"),
    ))
}

fn contact_section(place: &PlaceFeature) -> Option<String> {
    let mut section = String::new();
    if let Some(contact) = &place.contact {
        if let Some(phone) = &contact.phone {
            section.push_str(&flex_row("☎️", &link(&format!("tel:{phone}"), phone)));
        }
        if let Some(email) = &contact.email {
            section.push_str(&flex_row("📧", &link(&format!("mailto:{email}"), email)));
        }
    }
    if let Some(links) = &place.links {
        if let Some(website) = &links.website {
            let row = link(website.as_str(), text::strip_scheme(website.as_str()));
            section.push_str(&flex_row("🌐", &row));
        }
        if let Some(facebook) = &links.facebook {
            let decoded = text::percent_decoded(facebook.as_str());
            let row = link(facebook.as_str(), text::strip_scheme(&decoded));
            section.push_str(&flex_row("🇫", &row));
        }
        if let Some(instagram) = &links.instagram {
            let row = link(instagram.as_str(), text::strip_scheme(instagram.as_str()));
            section.push_str(&flex_row("📸", &row));
        }
    }
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

fn footer_section<T: TranslationGateway>(place: &PlaceFeature, i18n: &T) -> Option<String> {
    if !place.more_info {
        return None;
    }
    let anchor = place
        .osm_ref
        .as_ref()
        .map(|osm| format!("#{}", osm.anchor()))
        .unwrap_or_default();
    Some(format!(
        "<hr/><div class='popupflex-container'><div>ℹ️</div><div><a href=\"{MORE_INFO_URL}{anchor}\" target=\"_top\">{}</a></div></div>",
        i18n.translate(Phrase::MoreInfo)
    ))
}
