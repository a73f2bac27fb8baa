//! Color definitions for amino acids and report elements

use crossterm::style::Color;

/// Get the display color for an amino acid's one-letter code
pub fn get_amino_acid_color(amino: char) -> Color {
    match amino {
        'F' => Color::Red,
        'L' => Color::Green,
        'I' => Color::Yellow,
        'M' => Color::Blue,
        'V' => Color::Magenta,
        'S' => Color::Cyan,
        'P' => Color::Grey,
        'T' => Color::DarkGrey,
        'A' => Color::DarkRed,
        'Y' => Color::DarkGreen,
        'H' => Color::DarkYellow,
        'Q' => Color::DarkBlue,
        'N' => Color::DarkMagenta,
        'K' => Color::DarkCyan,
        'D' => Color::White,
        'E' => Color::Red,
        'C' => Color::Green,
        'W' => Color::Yellow,
        'R' => Color::Blue,
        'G' => Color::Magenta,
        '*' => Color::Red,
        _ => Color::White,
    }
}
