//! HTML helpers for card text.

use regex::Regex;
use std::sync::OnceLock;

fn list_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\w)\)").expect("valid list marker regex"))
}

fn accent_entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&([A-Za-z])(acute|grave|circ|uml|tilde|cedil|ring|slash);")
            .expect("valid entity regex")
    })
}

/// Turn `"Either (A) Nf7 or (B) Qh5"` into an HTML lettered list.
///
/// Markers are single word characters in parentheses and must start at
/// `(A)`. Text with fewer than two markers is returned unchanged.
pub fn ordered_list_to_html(text: &str) -> Result<String, String> {
    let markers: Vec<String> = list_marker_re()
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect();

    if markers.len() < 2 {
        return Ok(text.to_string());
    }
    if markers[0] != "A" {
        return Err(format!(
            "expected (A) for the first list item, got ({})",
            markers[0]
        ));
    }

    let mut html = String::new();
    let mut rest = text.to_string();
    let last = markers.len() - 1;

    for (i, marker) in markers.iter().enumerate() {
        let token = format!("({marker})");
        if rest.matches(&token).count() != 1 {
            return Err(format!("list marker {token} must appear exactly once"));
        }
        let Some((before, after)) = rest.split_once(&token) else {
            return Err(format!("list marker {token} not found"));
        };
        html.push_str(before);
        let after = after.to_string();

        if i == 0 {
            html.push_str("<ol type=\"A\"><li>");
        } else if i < last {
            html.push_str("</li><li>");
        } else {
            html.push_str("</li><li>");
            html.push_str(&after);
            html.push_str("</li></ol>");
        }
        rest = after;
    }

    Ok(html)
}

/// Replace accented letters (HTML entities or literal characters) with
/// their base letter, so text stored by the collection app in either form
/// compares equal.
pub fn fold_accents(text: &str) -> String {
    let decoded = accent_entity_re().replace_all(text, "$1");
    let decoded = decoded.replace("&szlig;", "ss");
    decoded.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}
