// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the application.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page showing the hero section.
    #[default]
    Home,
    /// Photo gallery and slideshow.
    Gallery,
    About,
    Services,
    Contact,
    /// Content editors, admin-only.
    Admin,
}

impl Screen {
    /// Screens reachable from the navigation bar, in display order.
    /// Admin is appended separately when the session allows it.
    pub const PUBLIC: [Screen; 5] = [
        Screen::Home,
        Screen::Gallery,
        Screen::About,
        Screen::Services,
        Screen::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Gallery => "Gallery",
            Screen::About => "About",
            Screen::Services => "Services",
            Screen::Contact => "Contact",
            Screen::Admin => "Admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn admin_is_not_in_the_public_list() {
        assert!(!Screen::PUBLIC.contains(&Screen::Admin));
    }
}
