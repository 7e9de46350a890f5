// ABOUTME: University theme table for the nb-beamer application
// ABOUTME: Static lookup of display names, RGB color triples, and logo files

use crate::errors::{BeamerError, Result};

/// One university theme: display name, four RGB color triples, logo file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub primary: (u8, u8, u8),
    pub secondary: (u8, u8, u8),
    pub tertiary: (u8, u8, u8),
    pub quaternary: (u8, u8, u8),
    pub logo: &'static str,
}

/// Closed set of known themes. Constructed once, never mutated.
pub const THEMES: &[Theme] = &[
    Theme {
        key: "cu",
        name: "University of Colorado Boulder",
        primary: (207, 184, 124),    // CU Gold
        secondary: (0, 0, 0),        // Black
        tertiary: (86, 90, 92),      // Dark Gray
        quaternary: (162, 164, 163), // Light Gray
        logo: "cu_logo.png",
    },
    Theme {
        key: "mit",
        name: "Massachusetts Institute of Technology",
        primary: (163, 31, 52),      // MIT Red
        secondary: (138, 139, 140),  // MIT Gray
        tertiary: (0, 0, 0),         // Black
        quaternary: (200, 200, 200), // Light Gray
        logo: "mit_logo.png",
    },
    Theme {
        key: "stanford",
        name: "Stanford University",
        primary: (140, 21, 21),      // Cardinal Red
        secondary: (46, 45, 41),     // Cool Gray
        tertiary: (0, 0, 0),         // Black
        quaternary: (229, 229, 229), // Light Gray
        logo: "stanford_logo.png",
    },
    Theme {
        key: "fiu",
        name: "Florida International University",
        primary: (8, 30, 63),        // FIU Blue
        secondary: (179, 163, 105),  // FIU Gold
        tertiary: (0, 0, 0),         // Black
        quaternary: (200, 200, 200), // Light Gray
        logo: "fiu_logo.png",
    },
];

impl Theme {
    /// Look up a theme by its key. Unknown keys are a boundary validation
    /// error carrying the list of known keys.
    pub fn lookup(key: &str) -> Result<&'static Theme> {
        THEMES.iter().find(|t| t.key == key).ok_or_else(|| {
            let available = THEMES
                .iter()
                .map(|t| t.key)
                .collect::<Vec<_>>()
                .join(", ");
            BeamerError::UnknownTheme {
                name: key.to_string(),
                available,
            }
        })
    }
}
