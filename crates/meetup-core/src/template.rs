// crates/meetup-core/src/template.rs - Article template and tolerant substitution
//
// The article is a fixed template with {{placeholder}} markers. Substitution
// is tolerant: a placeholder with no value in the context map passes through
// verbatim instead of erroring, so downstream syntax the site generator
// understands is never mangled.

use std::collections::HashMap;

use regex::Regex;

/// The generated article, header lines first, then the free-text body.
///
/// The header field names and their order are consumed by the site
/// generator and must stay byte-structurally stable.
pub const EVENT_TEMPLATE: &str = "\
Title: {{month}} {{year}} Portland Linux Kernel Meetup
Date: {{post_date}}
Category: Event Posts
Author: {{author}}
Summary: Portland Linux Kernel Meetup on {{month}} {{day}}, {{year}} {{start_time}} at {{location_short}}
Event-start: {{event_start}}
Event-end: {{event_end}}
Event-location: {{location_name}}, {{location_street}}, {{location_city}}
Event-url: {{url}}
Event-geo: {{location_geo}}
Event-categories: MEETING,PDXLKMU,Linux,Kernel

The Portland Linux Kernel Meetup for {{month}} {{year}} will be at...

* Date: {{weekday}}, {{month}} {{day}}, {{year}}
* Time: {{start_time}} to {{end_time}} {{time_zone}}
* Location: {{location_name}}, {{location_street}}, {{location_city}}

Come enjoy a beverage and chat with other people who are interested in the Linux kernel.
All experience levels are welcome. This is a friendly and casual meetup.";

fn placeholder_regex() -> Regex {
    Regex::new(r"\{\{(\w+)\}\}").unwrap()
}

/// Substitute `{{name}}` placeholders from the context map.
///
/// Unknown placeholders are left unchanged.
pub fn render(template: &str, context: &HashMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            match context.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// All distinct placeholder names in a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    for capture in placeholder_regex().captures_iter(template) {
        let name = capture[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
