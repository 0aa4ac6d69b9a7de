// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

use phf::phf_set;

/// The character-set categories eligible for extraction.
///
/// These are the `#ifdef` guards used to group definitions in
/// `keysymdef.h`; the full list of guards lives in
/// `/usr/include/X11/keysym.h`. Categories absent from this set
/// (vendor keys, special function keys, and so on) carry no useful
/// Unicode mapping and are skipped wholesale.
pub static CATEGORIES: phf::Set<&'static str> = phf_set! {
    "XK_MISCELLANY",
    "XK_XKB_KEYS",
    "XK_LATIN1",
    "XK_LATIN2",
    "XK_LATIN3",
    "XK_LATIN4",
    "XK_LATIN8",
    "XK_LATIN9",
    "XK_CAUCASUS",
    "XK_GREEK",
    "XK_KATAKANA",
    "XK_ARABIC",
    "XK_CYRILLIC",
    "XK_HEBREW",
    "XK_THAI",
    "XK_KOREAN",
    "XK_ARMENIAN",
    "XK_GEORGIAN",
    "XK_VIETNAMESE",
    "XK_CURRENCY",
    "XK_MATHEMATICAL",
    "XK_BRAILLE",
    "XK_SINHALA",
};
