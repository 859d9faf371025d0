// ABOUTME: The named color palette exposed as chat commands.
// ABOUTME: Fixed at startup; one command token per entry.

use crate::device::Rgb;

/// Named colors, one chat command each. `black` is special-cased by the
/// orchestrator as a blackout rather than a color change.
pub const PALETTE: &[(&str, Rgb)] = &[
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("orange", Rgb::new(255, 165, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("lime", Rgb::new(0, 255, 0)),
    ("teal", Rgb::new(0, 128, 128)),
    ("lavender", Rgb::new(230, 230, 250)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gold", Rgb::new(255, 215, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("black", Rgb::BLACK),
];
