// src/utils.rs
use lazy_static::lazy_static;
use regex::Regex;

/// Separator used when expanding `serverText` into a display description.
pub const LINE_SEPARATOR: &str = "\n";

lazy_static! {
    // Matches the mod's version prefix, e.g. "[PR v1.5.3] ".
    static ref VERSION_TAG: Regex = Regex::new(r"\[PR\sv[\d.]*\]\s").unwrap();
}

/// Removes the `[PR vX.Y] ` version prefix from a server name.
pub fn strip_version_tag(name: &str) -> String {
    VERSION_TAG.replace_all(name, "").into_owned()
}

/// Decodes the HTML entity references that show up in server and map names.
///
/// Handles the common named entities plus `&#NN;` / `&#xNN;` numeric forms.
/// Lenient: anything that does not parse as an entity is passed through
/// verbatim, including a bare `&`.
pub fn decode_html_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // Entity references are short; cap the scan so a stray '&' far from
        // any ';' doesn't walk the whole string. Byte search keeps the cap
        // safe on multi-byte text.
        let limit = tail.len().min(12);
        let semi = tail.as_bytes()[..limit].iter().position(|&b| b == b';');
        match semi {
            Some(semi) => {
                let body = &tail[1..semi];
                match decode_entity(body) {
                    Some(decoded) => {
                        out.push_str(&decoded);
                        rest = &tail[semi + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &tail[1..];
                    }
                }
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<String> {
    match body {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        "nbsp" => return Some(" ".to_string()),
        _ => {}
    }

    let digits = body.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

/// Expands the payload's `|` delimiters into line breaks for display.
pub fn expand_description(server_text: &str) -> String {
    server_text.replace('|', LINE_SEPARATOR)
}
