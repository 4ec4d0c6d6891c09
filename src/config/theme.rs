use image::Rgb;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(&self) -> Rgb<u8> {
        match self {
            Theme::Dark => Rgb([34, 34, 34]),
            Theme::Light => Rgb([255, 255, 255]),
        }
    }

    pub fn path_color(&self) -> Rgb<u8> {
        match self {
            Theme::Dark => Rgb([55, 90, 127]),
            Theme::Light => Rgb([31, 119, 180]),
        }
    }

    /// Tints of the x, y and z reference axes, in that order.
    pub fn axis_colors(&self) -> [Rgb<u8>; 3] {
        match self {
            Theme::Dark => [Rgb([200, 80, 80]), Rgb([90, 180, 90]), Rgb([150, 120, 210])],
            Theme::Light => [Rgb([214, 39, 40]), Rgb([44, 160, 44]), Rgb([148, 103, 189])],
        }
    }

    /// Origin body marker, same in both themes.
    pub fn marker_color(&self) -> Rgb<u8> {
        Rgb([255, 215, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn path_stands_out_from_background() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.background(), theme.path_color());
            assert_ne!(theme.background(), theme.marker_color());
        }
    }

    #[test]
    fn axis_tints_are_distinct() {
        for theme in [Theme::Dark, Theme::Light] {
            let [x, y, z] = theme.axis_colors();
            assert!(x != y && y != z && x != z);
            for tint in [x, y, z] {
                assert_ne!(tint, theme.background());
                assert_ne!(tint, theme.path_color());
                assert_ne!(tint, theme.marker_color());
            }
        }
    }
}
