//! String codecs for the closed vocabularies used in skin documents.
//!
//! Every lookup is total: an unknown key maps to the variant's default and
//! every variant has exactly one key, so `from_key(v.key()) == v`.

use serde::Serialize;

/// Element visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Visible,
    /// Takes up layout space but is not drawn.
    Invisible,
    /// Neither drawn nor laid out.
    #[default]
    #[serde(rename = "gone")]
    Hidden,
}

const VISIBILITIES: &[(&str, Visibility)] = &[
    ("visible", Visibility::Visible),
    ("invisible", Visibility::Invisible),
    ("gone", Visibility::Hidden),
];

impl Visibility {
    pub fn from_key(key: &str) -> Self {
        lookup(VISIBILITIES, key).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        reverse(VISIBILITIES, self).unwrap_or("gone")
    }

    /// Visible when `flag` holds, hidden otherwise.
    pub fn from_flag(flag: bool) -> Self {
        if flag { Self::Visible } else { Self::Hidden }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Horizontal text alignment inside a text element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gravity {
    #[default]
    Center,
    Left,
    Right,
}

const GRAVITIES: &[(&str, Gravity)] = &[
    ("center", Gravity::Center),
    ("left", Gravity::Left),
    ("right", Gravity::Right),
];

impl Gravity {
    pub fn from_key(key: &str) -> Self {
        lookup(GRAVITIES, key).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        reverse(GRAVITIES, self).unwrap_or("center")
    }
}

/// Font families a skin may select. Each maps to one concrete typeface on
/// the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    SansSerif,
    #[default]
    Default,
    DefaultBold,
    Monospace,
    Serif,
    RobotoCondensedBold,
    RobotoCondensedLight,
    RobotoCondensedRegular,
    RobotoSlabLight,
}

const FONT_FAMILIES: &[(&str, FontFamily)] = &[
    ("sans-serif", FontFamily::SansSerif),
    ("default", FontFamily::Default),
    ("default-bold", FontFamily::DefaultBold),
    ("monospace", FontFamily::Monospace),
    ("serif", FontFamily::Serif),
    ("roboto-condensed-bold", FontFamily::RobotoCondensedBold),
    ("roboto-condensed-light", FontFamily::RobotoCondensedLight),
    ("roboto-condensed-regular", FontFamily::RobotoCondensedRegular),
    ("roboto-slab-light", FontFamily::RobotoSlabLight),
];

impl FontFamily {
    /// Family for a skin key. Unknown keys select `Default`.
    pub fn from_key(key: &str) -> Self {
        lookup(FONT_FAMILIES, key).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        reverse(FONT_FAMILIES, self).unwrap_or("default")
    }

    /// Bundled font resource backing this family, if it is not a system font.
    pub fn resource(self) -> Option<&'static str> {
        match self {
            Self::RobotoCondensedBold => Some("roboto_condensed_bold"),
            Self::RobotoCondensedLight => Some("roboto_condensed_light"),
            Self::RobotoCondensedRegular => Some("roboto_condensed_regular"),
            Self::RobotoSlabLight => Some("roboto_slab_light"),
            _ => None,
        }
    }
}

/// Font style, carrying the host typeface style constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    BoldItalic,
    Italic,
}

const FONT_STYLES: &[(&str, FontStyle, u8)] = &[
    ("normal", FontStyle::Normal, 0),
    ("bold", FontStyle::Bold, 1),
    ("bold-italic", FontStyle::BoldItalic, 3),
    ("italic", FontStyle::Italic, 2),
];

impl FontStyle {
    pub fn from_key(key: &str) -> Self {
        FONT_STYLES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, s, _)| *s)
            .unwrap_or_default()
    }

    /// Style for a host typeface style constant. Unknown values are `Normal`.
    pub fn from_typeface_style(style: u8) -> Self {
        FONT_STYLES
            .iter()
            .find(|(_, _, t)| *t == style)
            .map(|(_, s, _)| *s)
            .unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        FONT_STYLES
            .iter()
            .find(|(_, s, _)| *s == self)
            .map_or("normal", |(k, _, _)| *k)
    }

    pub fn typeface_style(self) -> u8 {
        FONT_STYLES
            .iter()
            .find(|(_, s, _)| *s == self)
            .map_or(0, |(_, _, t)| *t)
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn reverse<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> Option<&'static str> {
    table.iter().find(|(_, v)| *v == value).map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_keys() {
        assert_eq!(Visibility::from_key("visible"), Visibility::Visible);
        assert_eq!(Visibility::from_key("invisible"), Visibility::Invisible);
        assert_eq!(Visibility::from_key("gone"), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.key(), "gone");
    }

    #[test]
    fn unknown_visibility_is_hidden() {
        assert_eq!(Visibility::from_key("shown"), Visibility::Hidden);
        assert_eq!(Visibility::from_key(""), Visibility::Hidden);
        assert_eq!(Visibility::from_key("VISIBLE"), Visibility::Hidden);
    }

    #[test]
    fn unknown_gravity_is_center() {
        assert_eq!(Gravity::from_key("left"), Gravity::Left);
        assert_eq!(Gravity::from_key("right"), Gravity::Right);
        assert_eq!(Gravity::from_key("justify"), Gravity::Center);
    }

    #[test]
    fn unknown_font_is_default() {
        assert_eq!(FontFamily::from_key("comic-sans"), FontFamily::Default);
        assert_eq!(FontFamily::from_key("serif"), FontFamily::Serif);
        assert_eq!(
            FontFamily::from_key("roboto-slab-light"),
            FontFamily::RobotoSlabLight
        );
    }

    #[test]
    fn font_table_covers_nine_families() {
        assert_eq!(FONT_FAMILIES.len(), 9);
        for (key, family) in FONT_FAMILIES {
            assert_eq!(family.key(), *key);
            assert_eq!(FontFamily::from_key(key), *family);
        }
    }

    #[test]
    fn bundled_fonts_have_resources() {
        assert_eq!(FontFamily::SansSerif.resource(), None);
        assert_eq!(
            FontFamily::RobotoCondensedLight.resource(),
            Some("roboto_condensed_light")
        );
    }

    #[test]
    fn font_style_by_key_and_constant() {
        assert_eq!(FontStyle::from_key("bold-italic"), FontStyle::BoldItalic);
        assert_eq!(FontStyle::from_typeface_style(2), FontStyle::Italic);
        assert_eq!(FontStyle::BoldItalic.typeface_style(), 3);
        assert_eq!(FontStyle::from_key("oblique"), FontStyle::Normal);
        assert_eq!(FontStyle::from_typeface_style(42), FontStyle::Normal);
    }

    #[test]
    fn every_variant_roundtrips_through_its_key() {
        for v in [Visibility::Visible, Visibility::Invisible, Visibility::Hidden] {
            assert_eq!(Visibility::from_key(v.key()), v);
        }
        for g in [Gravity::Center, Gravity::Left, Gravity::Right] {
            assert_eq!(Gravity::from_key(g.key()), g);
        }
        for s in [
            FontStyle::Normal,
            FontStyle::Bold,
            FontStyle::BoldItalic,
            FontStyle::Italic,
        ] {
            assert_eq!(FontStyle::from_key(s.key()), s);
            assert_eq!(FontStyle::from_typeface_style(s.typeface_style()), s);
        }
    }

    #[test]
    fn serialized_names_match_skin_keys() {
        assert_eq!(
            serde_json::to_string(&Visibility::Hidden).unwrap(),
            "\"gone\""
        );
        assert_eq!(
            serde_json::to_string(&FontFamily::RobotoCondensedBold).unwrap(),
            "\"roboto-condensed-bold\""
        );
        assert_eq!(
            serde_json::to_string(&FontStyle::BoldItalic).unwrap(),
            "\"bold-italic\""
        );
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_keys_never_fail(key in "\\PC{0,24}") {
                let v = Visibility::from_key(&key);
                prop_assert!(VISIBILITIES.iter().any(|(k, _)| *k == key) || v == Visibility::Hidden);
                let g = Gravity::from_key(&key);
                prop_assert!(GRAVITIES.iter().any(|(k, _)| *k == key) || g == Gravity::Center);
                let f = FontFamily::from_key(&key);
                prop_assert!(FONT_FAMILIES.iter().any(|(k, _)| *k == key) || f == FontFamily::Default);
                let s = FontStyle::from_key(&key);
                prop_assert!(FONT_STYLES.iter().any(|(k, _, _)| *k == key) || s == FontStyle::Normal);
            }
        }
    }
}
