//! Static catalog of personal app projects shown in the "Work" grid.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// A label chip rendered next to a project name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    New,
    ComingSoon,
    /// Target platform, e.g. `"macos"`.
    Platform(&'static str),
}

impl Badge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::ComingSoon => "coming soon",
            Self::Platform(name) => name,
        }
    }

    /// Modifier class for the chip color.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::New => "badge badge--new",
            Self::ComingSoon => "badge badge--soon",
            Self::Platform(_) => "badge badge--platform",
        }
    }
}

/// One portfolio app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub badges: &'static [Badge],
    /// Whether the project has a released detail page.
    pub released: bool,
}

impl Project {
    /// Detail page path, for released projects only.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        self.released.then(|| format!("/apps/{}", self.slug))
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "lapse",
        name: "Lapse",
        summary: "Timelapse screen recording app",
        image: "/images/apps/lapse.svg",
        badges: &[Badge::New, Badge::Platform("macos")],
        released: true,
    },
    Project {
        slug: "silentshot",
        name: "Silentshot",
        summary: "Capture screenshot to clipboard or save them to a directory in background",
        image: "/images/apps/silentshot.svg",
        badges: &[Badge::ComingSoon, Badge::Platform("macos")],
        released: false,
    },
    Project {
        slug: "mirror",
        name: "Mirror",
        summary: "Webcam companion for your native screen recorder and also to preview your zoom calls",
        image: "/images/apps/mirror-2.svg",
        badges: &[Badge::ComingSoon, Badge::Platform("macos")],
        released: false,
    },
    Project {
        slug: "today",
        name: "Today",
        summary: "A simple notes app on menubar to jot down your thoughts",
        image: "/images/apps/today.svg",
        badges: &[Badge::ComingSoon, Badge::Platform("macos")],
        released: false,
    },
    Project {
        slug: "snipcode",
        name: "Snipcode",
        summary: "Capture your frequently used code snippets from any app and share to any app instantly",
        image: "/images/apps/snipcode.svg",
        badges: &[Badge::ComingSoon, Badge::Platform("macos"), Badge::Platform("web")],
        released: false,
    },
    Project {
        slug: "snippy",
        name: "Snippy",
        summary: "A space for your creative work on the web",
        image: "/images/apps/snippy.svg",
        badges: &[Badge::ComingSoon, Badge::Platform("macos"), Badge::Platform("web")],
        released: false,
    },
];

/// Look up a project by slug.
#[must_use]
pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
