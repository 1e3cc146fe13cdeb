//! Built-in family table and alias map
//!
//! The remote service has no endpoint for listing families, so the known sets
//! are kept here. Order matters: set expansion and suggestions follow it.

/// `(set key, set display name, [(family slug, family display name)])`
pub(crate) type SetEntry = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

pub(crate) const BUILTIN_SETS: &[SetEntry] = &[
    (
        "ultimate",
        "Ultimate",
        &[
            ("ultimate-bold", "Ultimate Bold"),
            ("ultimate-light", "Ultimate Light"),
            ("ultimate-regular", "Ultimate Regular"),
            ("ultimate-colors", "Ultimate Colors"),
            ("ultimate-duotone", "Ultimate Duotone"),
        ],
    ),
    (
        "sharp",
        "Sharp",
        &[
            ("sharp-line", "Sharp Line"),
            ("sharp-solid", "Sharp Solid"),
            ("sharp-duo", "Sharp Duo"),
            ("sharp-flat", "Sharp Flat"),
            ("sharp-remix", "Sharp Remix"),
            ("sharp-gradient", "Sharp Gradient"),
            ("sharp-neon", "Sharp Neon"),
            ("sharp-pop", "Sharp Pop"),
        ],
    ),
    (
        "core",
        "Core",
        &[
            ("core-line", "Core Line"),
            ("core-solid", "Core Solid"),
            ("core-duo", "Core Duo"),
            ("core-flat", "Core Flat"),
            ("core-remix", "Core Remix"),
            ("core-gradient", "Core Gradient"),
            ("core-neon", "Core Neon"),
            ("core-pop", "Core Pop"),
        ],
    ),
    (
        "flex",
        "Flex",
        &[
            ("flex-line", "Flex Line"),
            ("flex-solid", "Flex Solid"),
            ("flex-duo", "Flex Duo"),
            ("flex-flat", "Flex Flat"),
            ("flex-remix", "Flex Remix"),
            ("flex-gradient", "Flex Gradient"),
            ("flex-neon", "Flex Neon"),
            ("flex-pop", "Flex Pop"),
        ],
    ),
    (
        "plump",
        "Plump",
        &[
            ("plump-line", "Plump Line"),
            ("plump-solid", "Plump Solid"),
            ("plump-duo", "Plump Duo"),
            ("plump-flat", "Plump Flat"),
            ("plump-remix", "Plump Remix"),
            ("plump-gradient", "Plump Gradient"),
            ("plump-neon", "Plump Neon"),
            ("plump-pop", "Plump Pop"),
        ],
    ),
    (
        "micro",
        "Micro",
        &[
            ("micro-line", "Micro Line"),
            ("micro-solid", "Micro Solid"),
        ],
    ),
    (
        "freehand",
        "Freehand",
        &[
            ("freehand-duotone", "Freehand Duotone"),
        ],
    ),
    (
        "material-pro",
        "Material Pro",
        &[
            ("sharp-line-material-pro", "Sharp Line - Material Pro"),
            ("outlined-line-material-pro", "Outlined Line - Material Pro"),
            ("rounded-line-material-pro", "Rounded Line - Material Pro"),
            ("sharp-fill-material-pro", "Sharp Fill - Material Pro"),
            ("outlined-fill-material-pro", "Outlined Fill - Material Pro"),
            ("rounded-fill-material-pro", "Rounded Fill - Material Pro"),
        ],
    ),
    (
        "nova",
        "Nova",
        &[
            ("nova-line", "Nova Line"),
            ("nova-solid", "Nova Solid"),
        ],
    ),
    (
        "cyber",
        "Cyber",
        &[
            ("cyber-line", "Cyber Line"),
            ("cyber-duotone", "Cyber Duotone"),
        ],
    ),
    (
        "kameleon",
        "Kameleon",
        &[
            ("kameleon-colors", "Kameleon Colors"),
            ("kameleon-duo", "Kameleon Duo"),
            ("kameleon-pop", "Kameleon Pop"),
        ],
    ),
    (
        "solar",
        "Solar",
        &[
            ("solar-bold", "Solar Bold"),
            ("solar-bold-duotone", "Solar Bold Duotone"),
            ("solar-line-duotone", "Solar Line Duotone"),
            ("solar-linear", "Solar Linear"),
            ("solar-broken", "Solar Broken"),
        ],
    ),
    // Third-party sets hosted by the service
    (
        "material-symbols",
        "Material Symbols",
        &[
            ("sharp-line-material-symbols", "Sharp Line - Material Symbols"),
            ("outlined-line-material-symbols", "Outlined Line - Material Symbols"),
            ("rounded-line-material-symbols", "Rounded Line - Material Symbols"),
            ("sharp-fill-material-symbols", "Sharp Fill - Material Symbols"),
            ("outlined-fill-material-symbols", "Outlined Fill - Material Symbols"),
            ("rounded-fill-material-symbols", "Rounded Fill - Material Symbols"),
        ],
    ),
    (
        "tabler",
        "Tabler",
        &[
            ("tabler-line", "Tabler Line"),
            ("tabler-filled", "Tabler Filled"),
        ],
    ),
    (
        "remix",
        "Remix",
        &[
            ("remix-line", "Remix Line"),
            ("remix-fill", "Remix Fill"),
        ],
    ),
    (
        "carbon",
        "Carbon",
        &[
            ("carbon", "Carbon"),
        ],
    ),
    (
        "feather",
        "Feather",
        &[
            ("feather", "Feather"),
        ],
    ),
    (
        "iconoir",
        "Iconoir",
        &[
            ("iconoir-regular", "Iconoir Regular"),
        ],
    ),
    (
        "unicons",
        "Unicons",
        &[
            ("unicons-line", "Unicons Line"),
        ],
    ),
    (
        "bootstrap",
        "Bootstrap",
        &[
            ("bootstrap", "Bootstrap"),
        ],
    ),
    (
        "atlas",
        "Atlas",
        &[
            ("atlas-line", "Atlas Line"),
        ],
    ),
    (
        "heroicons",
        "Heroicons",
        &[
            ("heroicons-outline", "Heroicons Outline"),
            ("heroicons-solid", "Heroicons Solid"),
        ],
    ),
    (
        "font-awesome",
        "Font Awesome",
        &[
            ("font-awesome-regular", "Font Awesome Regular"),
            ("font-awesome-solid", "Font Awesome Solid"),
        ],
    ),
    (
        "phosphor",
        "Phosphor",
        &[
            ("phosphor-thin", "Phosphor Thin"),
            ("phosphor-light", "Phosphor Light"),
            ("phosphor-regular", "Phosphor Regular"),
            ("phosphor-bold", "Phosphor Bold"),
            ("phosphor-fill", "Phosphor Fill"),
            ("phosphor-duotone", "Phosphor Duotone"),
        ],
    ),
    (
        "lucide",
        "Lucide",
        &[
            ("lucide-line", "Lucide Line"),
        ],
    ),
    (
        "mingcute",
        "MingCute",
        &[
            ("mingcute-line", "MingCute Line"),
            ("mingcute-fill", "MingCute Fill"),
        ],
    ),
    (
        "mynaui",
        "Mynaui",
        &[
            ("mynaui-line", "Mynaui Line"),
        ],
    ),
    (
        "radix",
        "Radix",
        &[
            ("radix", "Radix"),
        ],
    ),
    (
        "ionic",
        "Ionic",
        &[
            ("ionic-sharp", "Ionic Sharp"),
        ],
    ),
];

/// Shorthand spellings mapped to a set key. Keys are lowercase.
pub(crate) const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("mat", "material-pro"),
    ("material", "material-pro"),
    ("materials", "material-pro"),
    ("matpro", "material-pro"),
    ("material-pro", "material-pro"),
    ("materialpro", "material-pro"),
    ("material-symbols", "material-symbols"),
    ("material symbols", "material-symbols"),
    ("mat-sym", "material-symbols"),
    ("matsymbols", "material-symbols"),
    ("materialsymbols", "material-symbols"),
];

/// Style words used by the families above, for help text.
pub const STYLES: &[&str] = &[
    "Line", "Solid", "Duo", "Flat", "Remix", "Gradient", "Neon", "Pop", "Colors",
];
