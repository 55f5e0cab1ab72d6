/// Letters recognised by the default 63-pixel classifier, in output order.
pub const LETTERS: [&str; 7] = ["A", "B", "C", "D", "E", "J", "K"];

/// Width of a letter grid in pixels (9 rows of 7).
pub const GRID_WIDTH: usize = 7;

/// Renders a pixel vector as ASCII art, `width` cells per line.
/// Positive cells are drawn as `#`, everything else as a space.
pub fn render(pixels: &[f64], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    pixels.chunks(width)
        .map(|row| row.iter().map(|&p| if p > 0.0 { '#' } else { ' ' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Index of the largest output, or `None` for an empty vector.
pub fn argmax(outputs: &[f64]) -> Option<usize> {
    outputs.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Maps the strongest output unit to its label.
pub fn recognize<'a>(outputs: &[f64], labels: &[&'a str]) -> Option<&'a str> {
    argmax(outputs).and_then(|i| labels.get(i).copied())
}
