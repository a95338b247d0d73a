//! Handwriting glyph outlines.
//!
//! Coordinates live in a 100-unit nominal cell with y pointing down: cap height from y=10 to the
//! baseline at y=80, x-height at y=40, descenders reaching y=100. Each entry is one continuous pen
//! stroke in SVG path syntax, listed in drawing order.

pub(crate) struct GlyphDef {
    pub(crate) ch: char,
    pub(crate) advance: f64,
    pub(crate) strokes: &'static [&'static str],
}

const fn g(ch: char, advance: f64, strokes: &'static [&'static str]) -> GlyphDef {
    GlyphDef {
        ch,
        advance,
        strokes,
    }
}

/// Outline used for characters missing from [`GLYPHS`].
pub(crate) const PLACEHOLDER: GlyphDef = g('\u{fffd}', 60.0, &["M10 10 L50 10 L50 80 L10 80 Z"]);

/// Horizontal advance of a space in cell units.
pub(crate) const SPACE_ADVANCE: f64 = 35.0;

pub(crate) static GLYPHS: &[GlyphDef] = &[
    // Uppercase.
    g('A', 60.0, &["M10 80 L30 10 L50 80", "M17 55 L43 55"]),
    g(
        'B',
        60.0,
        &[
            "M12 10 L12 80",
            "M12 10 L34 10 Q48 10 48 27 Q48 44 34 44 L12 44",
            "M12 44 L36 44 Q50 44 50 62 Q50 80 36 80 L12 80",
        ],
    ),
    g(
        'C',
        60.0,
        &["M50 22 Q42 10 30 10 Q10 10 10 45 Q10 80 30 80 Q42 80 50 68"],
    ),
    g(
        'D',
        60.0,
        &["M12 10 L12 80", "M12 10 L28 10 Q50 10 50 45 Q50 80 28 80 L12 80"],
    ),
    g('E', 58.0, &["M48 10 L12 10 L12 80 L48 80", "M12 45 L40 45"]),
    g('F', 56.0, &["M48 10 L12 10 L12 80", "M12 45 L40 45"]),
    g(
        'G',
        62.0,
        &["M50 22 Q42 10 30 10 Q10 10 10 45 Q10 80 30 80 Q50 80 50 55 L32 55"],
    ),
    g('H', 60.0, &["M12 10 L12 80", "M48 10 L48 80", "M12 45 L48 45"]),
    g('I', 30.0, &["M15 10 L15 80"]),
    g('J', 56.0, &["M45 10 L45 62 Q45 80 28 80 Q12 80 10 65"]),
    g('K', 58.0, &["M12 10 L12 80", "M48 10 L12 50", "M24 38 L50 80"]),
    g('L', 54.0, &["M12 10 L12 80 L46 80"]),
    g('M', 80.0, &["M10 80 L10 10 L40 55 L70 10 L70 80"]),
    g('N', 60.0, &["M12 80 L12 10 L48 80 L48 10"]),
    g(
        'O',
        62.0,
        &["M30 10 Q10 10 10 45 Q10 80 30 80 Q50 80 50 45 Q50 10 30 10 Z"],
    ),
    g(
        'P',
        58.0,
        &["M12 80 L12 10 L34 10 Q50 10 50 28 Q50 46 34 46 L12 46"],
    ),
    g(
        'Q',
        62.0,
        &[
            "M30 10 Q10 10 10 45 Q10 80 30 80 Q50 80 50 45 Q50 10 30 10 Z",
            "M36 62 L52 84",
        ],
    ),
    g(
        'R',
        60.0,
        &[
            "M12 80 L12 10 L34 10 Q50 10 50 28 Q50 46 34 46 L12 46",
            "M30 46 L50 80",
        ],
    ),
    g(
        'S',
        58.0,
        &["M48 20 Q40 10 30 10 Q12 10 12 27 Q12 42 30 45 Q48 48 48 63 Q48 80 30 80 Q18 80 10 70"],
    ),
    g('T', 60.0, &["M8 10 L52 10", "M30 10 L30 80"]),
    g('U', 60.0, &["M12 10 L12 60 Q12 80 30 80 Q48 80 48 60 L48 10"]),
    g('V', 60.0, &["M10 10 L30 80 L50 10"]),
    g('W', 80.0, &["M8 10 L22 80 L40 35 L58 80 L72 10"]),
    g('X', 60.0, &["M10 10 L50 80", "M50 10 L10 80"]),
    g('Y', 60.0, &["M10 10 L30 45 L50 10", "M30 45 L30 80"]),
    g('Z', 60.0, &["M10 10 L50 10 L10 80 L50 80"]),
    // Lowercase.
    g(
        'a',
        52.0,
        &[
            "M42 48 Q36 40 26 40 Q10 40 10 60 Q10 80 26 80 Q36 80 42 70",
            "M42 40 L42 80",
        ],
    ),
    g(
        'b',
        52.0,
        &[
            "M10 10 L10 80",
            "M10 55 Q16 40 28 40 Q42 40 42 60 Q42 80 28 80 Q16 80 10 68",
        ],
    ),
    g(
        'c',
        50.0,
        &["M42 46 Q36 40 27 40 Q10 40 10 60 Q10 80 27 80 Q36 80 42 74"],
    ),
    g(
        'd',
        52.0,
        &[
            "M42 10 L42 80",
            "M42 55 Q36 40 24 40 Q10 40 10 60 Q10 80 24 80 Q36 80 42 68",
        ],
    ),
    g(
        'e',
        50.0,
        &["M10 60 L42 60 Q42 40 26 40 Q10 40 10 60 Q10 80 27 80 Q36 80 42 74"],
    ),
    g(
        'f',
        40.0,
        &["M38 14 Q34 10 28 10 Q18 10 18 24 L18 80", "M8 42 L32 42"],
    ),
    g(
        'g',
        52.0,
        &[
            "M42 55 Q36 40 24 40 Q10 40 10 58 Q10 76 24 76 Q36 76 42 64",
            "M42 40 L42 88 Q42 100 26 100 Q16 100 10 94",
        ],
    ),
    g(
        'h',
        52.0,
        &["M10 10 L10 80", "M10 54 Q16 40 28 40 Q42 40 42 56 L42 80"],
    ),
    g('i', 30.0, &["M15 40 L15 80", "M15 24 L15 27"]),
    g('j', 34.0, &["M22 40 L22 90 Q22 100 10 100", "M22 24 L22 27"]),
    g('k', 48.0, &["M10 10 L10 80", "M40 40 L10 64", "M20 56 L42 80"]),
    g('l', 30.0, &["M15 10 L15 80"]),
    g(
        'm',
        70.0,
        &[
            "M10 40 L10 80",
            "M10 52 Q16 40 25 40 Q35 40 35 54 L35 80",
            "M35 54 Q41 40 50 40 Q60 40 60 54 L60 80",
        ],
    ),
    g(
        'n',
        52.0,
        &["M10 40 L10 80", "M10 54 Q16 40 28 40 Q42 40 42 56 L42 80"],
    ),
    g(
        'o',
        52.0,
        &["M26 40 Q10 40 10 60 Q10 80 26 80 Q42 80 42 60 Q42 40 26 40 Z"],
    ),
    g(
        'p',
        52.0,
        &[
            "M10 40 L10 100",
            "M10 55 Q16 40 28 40 Q42 40 42 60 Q42 80 28 80 Q16 80 10 68",
        ],
    ),
    g(
        'q',
        52.0,
        &[
            "M42 40 L42 100",
            "M42 55 Q36 40 24 40 Q10 40 10 60 Q10 80 24 80 Q36 80 42 68",
        ],
    ),
    g(
        'r',
        42.0,
        &["M10 40 L10 80", "M10 56 Q16 40 28 40 Q34 40 38 44"],
    ),
    g(
        's',
        50.0,
        &["M40 45 Q34 40 26 40 Q12 40 12 50 Q12 58 26 60 Q40 62 40 70 Q40 80 26 80 Q16 80 10 74"],
    ),
    g(
        't',
        40.0,
        &["M20 20 L20 72 Q20 80 28 80 Q34 80 36 76", "M8 40 L34 40"],
    ),
    g(
        'u',
        52.0,
        &["M10 40 L10 64 Q10 80 26 80 Q42 80 42 64", "M42 40 L42 80"],
    ),
    g('v', 52.0, &["M10 40 L26 80 L42 40"]),
    g('w', 68.0, &["M8 40 L20 80 L34 52 L48 80 L60 40"]),
    g('x', 52.0, &["M10 40 L42 80", "M42 40 L10 80"]),
    g(
        'y',
        52.0,
        &["M10 40 L26 78", "M42 40 L24 92 Q20 100 10 100"],
    ),
    g('z', 52.0, &["M10 40 L42 40 L10 80 L42 80"]),
    // Digits.
    g(
        '0',
        60.0,
        &["M30 10 Q10 10 10 45 Q10 80 30 80 Q50 80 50 45 Q50 10 30 10 Z"],
    ),
    g('1', 56.0, &["M18 22 L32 10 L32 80", "M18 80 L46 80"]),
    g(
        '2',
        60.0,
        &["M12 24 Q16 10 30 10 Q48 10 48 27 Q48 42 12 80 L50 80"],
    ),
    g(
        '3',
        60.0,
        &[
            "M12 18 Q20 10 30 10 Q48 10 48 27 Q48 44 28 44",
            "M28 44 Q50 44 50 62 Q50 80 30 80 Q18 80 10 70",
        ],
    ),
    g('4', 60.0, &["M40 80 L40 10 L10 58 L52 58"]),
    g(
        '5',
        60.0,
        &["M48 10 L16 10 L13 42 Q20 38 30 38 Q50 38 50 59 Q50 80 30 80 Q18 80 10 72"],
    ),
    g(
        '6',
        60.0,
        &["M46 16 Q40 10 30 10 Q10 10 10 48 Q10 80 30 80 Q50 80 50 61 Q50 42 30 42 Q16 42 10 54"],
    ),
    g('7', 60.0, &["M10 10 L50 10 L24 80"]),
    g(
        '8',
        60.0,
        &["M30 44 Q12 44 12 27 Q12 10 30 10 Q48 10 48 27 Q48 44 30 44 Q10 44 10 62 Q10 80 30 80 Q50 80 50 62 Q50 44 30 44 Z"],
    ),
    g(
        '9',
        60.0,
        &["M50 40 Q44 52 30 52 Q10 52 10 31 Q10 10 30 10 Q50 10 50 40 Q50 80 26 80 Q16 80 12 74"],
    ),
    // Punctuation and symbols.
    g('.', 30.0, &["M15 78 L15 80"]),
    g(',', 30.0, &["M16 76 L12 90"]),
    g('!', 30.0, &["M15 10 L15 62", "M15 76 L15 80"]),
    g(
        '?',
        52.0,
        &[
            "M10 22 Q14 10 28 10 Q44 10 44 26 Q44 40 28 46 L28 60",
            "M28 76 L28 80",
        ],
    ),
    g(':', 30.0, &["M15 44 L15 47", "M15 76 L15 80"]),
    g(';', 30.0, &["M15 44 L15 47", "M16 76 L12 90"]),
    g('-', 40.0, &["M8 48 L32 48"]),
    g('_', 50.0, &["M4 82 L46 82"]),
    g('+', 54.0, &["M10 48 L44 48", "M27 31 L27 65"]),
    g('=', 54.0, &["M10 40 L44 40", "M10 56 L44 56"]),
    g('*', 52.0, &["M26 24 L26 50", "M14 30 L38 44", "M38 30 L14 44"]),
    g('/', 44.0, &["M36 8 L8 84"]),
    g('(', 32.0, &["M26 6 Q8 44 26 88"]),
    g(')', 32.0, &["M6 6 Q24 44 6 88"]),
    g('<', 54.0, &["M44 30 L10 48 L44 66"]),
    g('>', 54.0, &["M10 30 L44 48 L10 66"]),
    g('\'', 26.0, &["M13 10 L13 24"]),
    g('"', 36.0, &["M12 10 L12 24", "M24 10 L24 24"]),
    g(
        '%',
        60.0,
        &[
            "M48 10 L12 80",
            "M16 12 Q8 12 8 20 Q8 28 16 28 Q24 28 24 20 Q24 12 16 12 Z",
            "M44 62 Q36 62 36 70 Q36 78 44 78 Q52 78 52 70 Q52 62 44 62 Z",
        ],
    ),
];
