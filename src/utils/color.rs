use plotters::style::RGBColor;

use crate::utils::errors::ChartError;

/// Named stroke colors accepted alongside `#rgb`, `#rrggbb`, and `rgb(r,g,b)`
const NAMED_COLORS: [(&str, RGBColor); 12] = [
    ("red", RGBColor(231, 76, 60)),
    ("green", RGBColor(46, 204, 113)),
    ("blue", RGBColor(52, 152, 219)),
    ("purple", RGBColor(155, 89, 182)),
    ("orange", RGBColor(243, 156, 18)),
    ("teal", RGBColor(26, 188, 156)),
    ("pink", RGBColor(233, 30, 99)),
    ("cyan", RGBColor(0, 188, 212)),
    ("brown", RGBColor(121, 85, 72)),
    ("grey", RGBColor(96, 125, 139)),
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
];

/// Parse a stroke color specification into an RGB color.
///
/// Accepts the forms a chart caller typically passes: `#rgb`, `#rrggbb`,
/// `rgb(r, g, b)`, or one of the named palette entries.
pub fn parse_color(spec: &str) -> Result<RGBColor, ChartError> {
    let lower = spec.trim().to_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(spec.to_string()));
    }

    if let Some(body) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let channels: Vec<u8> = body
            .split(',')
            .filter_map(|part| part.trim().parse::<u8>().ok())
            .collect();
        if channels.len() == 3 {
            return Ok(RGBColor(channels[0], channels[1], channels[2]));
        }
        return Err(ChartError::InvalidColor(spec.to_string()));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(|| ChartError::InvalidColor(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    match hex.len() {
        // #rgb expands each digit: a -> aa
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = c.to_digit(16)? as u8;
                channels[i] = digit * 16 + digit;
            }
            Some(RGBColor(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(RGBColor(r, g, b))
        }
        _ => None,
    }
}
