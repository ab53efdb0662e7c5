// Pattern: Proxy.
// Two stand-ins for the same `Image` contract: one defers the expensive load
// until the first display, the other checks the viewer's role first.

use std::cell::{Cell, OnceCell};

use crate::error::{DemoError, ValidationError};
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "proxy",
    topic: Topic::Structural,
    summary: "Lazy-loading and access-checking proxies in front of an image",
    run,
};

pub trait Image {
    fn filename(&self) -> &str;
    fn display(&self, viewer: &Viewer) -> Result<String, DemoError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Member,
    Admin,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    pub name: String,
    pub role: Role,
}

impl Viewer {
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            role,
        }
    }
}

/// The real subject. Loading happens in the constructor.
pub struct DiskImage {
    filename: String,
    pixels: usize,
}

impl DiskImage {
    pub fn load(filename: &str) -> Self {
        tracing::debug!(filename, "loading image from disk");
        Self {
            filename: filename.to_string(),
            // stand-in for decoding
            pixels: filename.len() * 1024,
        }
    }
}

impl Image for DiskImage {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn display(&self, viewer: &Viewer) -> Result<String, DemoError> {
        Ok(format!(
            "{} sees {} ({} px)",
            viewer.name, self.filename, self.pixels
        ))
    }
}

/// Virtual proxy: loads on first display, then reuses the loaded image.
pub struct LazyImage {
    filename: String,
    loaded: OnceCell<DiskImage>,
    loads: Cell<u32>,
}

impl LazyImage {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            loaded: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn load_count(&self) -> u32 {
        self.loads.get()
    }

    fn real(&self) -> &DiskImage {
        self.loaded.get_or_init(|| {
            self.loads.set(self.loads.get() + 1);
            DiskImage::load(&self.filename)
        })
    }
}

impl Image for LazyImage {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn display(&self, viewer: &Viewer) -> Result<String, DemoError> {
        self.real().display(viewer)
    }
}

/// Protection proxy: only viewers at or above `minimum` get through.
pub struct GuardedImage {
    inner: Box<dyn Image>,
    minimum: Role,
}

impl GuardedImage {
    pub fn new(inner: Box<dyn Image>, minimum: Role) -> Self {
        Self { inner, minimum }
    }

    fn rank(role: Role) -> u8 {
        match role {
            Role::Guest => 0,
            Role::Member => 1,
            Role::Admin => 2,
        }
    }
}

impl Image for GuardedImage {
    fn filename(&self) -> &str {
        self.inner.filename()
    }

    fn display(&self, viewer: &Viewer) -> Result<String, DemoError> {
        if Self::rank(viewer.role) < Self::rank(self.minimum) {
            return Err(ValidationError::AccessDenied {
                role: format!("{:?}", viewer.role).to_lowercase(),
            }
            .into());
        }
        self.inner.display(viewer)
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Proxy");
    let alice = Viewer::new("alice", Role::Member);
    let guest = Viewer::new("guest", Role::Guest);

    session.step("Lazy proxy");
    let lazy = LazyImage::new("holiday.png");
    session.note(format!("loaded before display: {}", lazy.is_loaded()));
    for _ in 0..2 {
        session.result(lazy.display(&alice)?);
    }
    session.note(format!("disk loads: {}", lazy.load_count()));

    session.step("Protection proxy in front of a lazy proxy");
    let guarded = GuardedImage::new(Box::new(LazyImage::new("payroll.png")), Role::Member);
    for viewer in [&guest, &alice] {
        if let Some(out) = session.attempt(guarded.display(viewer))? {
            session.result(out);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_loads_once_on_first_display() {
        let viewer = Viewer::new("v", Role::Guest);
        let lazy = LazyImage::new("a.png");
        assert!(!lazy.is_loaded());

        lazy.display(&viewer).unwrap();
        lazy.display(&viewer).unwrap();
        assert!(lazy.is_loaded());
        assert_eq!(lazy.load_count(), 1);
    }

    #[test]
    fn test_proxy_matches_real_subject() {
        let viewer = Viewer::new("v", Role::Admin);
        let real = DiskImage::load("b.png");
        let lazy = LazyImage::new("b.png");
        assert_eq!(real.display(&viewer).unwrap(), lazy.display(&viewer).unwrap());
        assert_eq!(lazy.filename(), real.filename());
    }

    #[test]
    fn test_guard_denies_low_roles() {
        let guarded = GuardedImage::new(Box::new(DiskImage::load("c.png")), Role::Admin);
        let member = Viewer::new("m", Role::Member);
        assert!(matches!(
            guarded.display(&member),
            Err(DemoError::Rejected(ValidationError::AccessDenied { role })) if role == "member"
        ));
        assert!(guarded.display(&Viewer::new("root", Role::Admin)).is_ok());
    }

    #[test]
    fn test_guard_forwards_to_inner() {
        let guarded = GuardedImage::new(Box::new(LazyImage::new("d.png")), Role::Guest);
        assert_eq!(guarded.filename(), "d.png");
        assert_eq!(
            guarded.display(&Viewer::new("g", Role::Guest)).unwrap(),
            "g sees d.png (5120 px)"
        );
    }
}
