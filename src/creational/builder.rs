// Pattern: Builder and Director.
// The builder assembles a Computer part by part and validates on `build`;
// the director knows the step sequences for common configurations.

use std::fmt;
use thiserror::Error;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "builder",
    topic: Topic::Creational,
    summary: "Step-by-step computer assembly with validation and a Director for presets",
    run,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("missing required part: {0}")]
    MissingPart(&'static str),

    #[error("RAM must be a power of two between 4 and 256 GB, got {0} GB")]
    InvalidRam(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Computer {
    pub cpu: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub gpu: Option<String>,
    pub os: String,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {} GB RAM, {} GB storage, {}, running {}",
            self.cpu,
            self.ram_gb,
            self.storage_gb,
            self.gpu.as_deref().unwrap_or("integrated graphics"),
            self.os
        )
    }
}

#[derive(Debug, Default)]
pub struct ComputerBuilder {
    cpu: Option<String>,
    ram_gb: Option<u32>,
    storage_gb: Option<u32>,
    gpu: Option<String>,
    os: Option<String>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn ram_gb(mut self, gb: u32) -> Self {
        self.ram_gb = Some(gb);
        self
    }

    pub fn storage_gb(mut self, gb: u32) -> Self {
        self.storage_gb = Some(gb);
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    /// CPU, RAM and storage are required; the OS defaults to Linux.
    pub fn build(self) -> Result<Computer, BuildError> {
        let cpu = self.cpu.ok_or(BuildError::MissingPart("cpu"))?;
        let ram_gb = self.ram_gb.ok_or(BuildError::MissingPart("ram"))?;
        if !(4..=256).contains(&ram_gb) || !ram_gb.is_power_of_two() {
            return Err(BuildError::InvalidRam(ram_gb));
        }
        let storage_gb = self.storage_gb.ok_or(BuildError::MissingPart("storage"))?;

        Ok(Computer {
            cpu,
            ram_gb,
            storage_gb,
            gpu: self.gpu,
            os: self.os.unwrap_or_else(|| "Linux".to_string()),
        })
    }
}

/// Knows the recipes, not the parts catalogue.
pub struct Director;

impl Director {
    pub fn gaming_rig(&self, builder: ComputerBuilder) -> ComputerBuilder {
        builder
            .cpu("Ryzen 9 7950X")
            .ram_gb(64)
            .storage_gb(2048)
            .gpu("RTX 4090")
            .os("Windows 11")
    }

    pub fn office_pc(&self, builder: ComputerBuilder) -> ComputerBuilder {
        builder.cpu("Core i5-13400").ram_gb(16).storage_gb(512)
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Builder");

    session.step("Manual build");
    let custom = ComputerBuilder::new()
        .cpu("Apple M3")
        .ram_gb(32)
        .storage_gb(1024)
        .os("macOS")
        .build();
    match custom {
        Ok(computer) => session.result(computer.to_string()),
        Err(err) => session.note(format!("build failed: {}", err)),
    }

    let incomplete = ComputerBuilder::new().ram_gb(8).storage_gb(256).build();
    if let Err(err) = incomplete {
        session.note(format!("build failed: {}", err));
    }

    session.step("Director presets");
    let director = Director;
    let gaming = director.gaming_rig(ComputerBuilder::new()).build()?;
    session.result(format!("gaming: {}", gaming));
    let office = director.office_pc(ComputerBuilder::new()).build()?;
    session.result(format!("office: {}", office));

    session.step("Preset with an extra step");
    let workstation = director
        .office_pc(ComputerBuilder::new())
        .ram_gb(128)
        .gpu("RTX A4000")
        .build()?;
    session.result(format!("workstation: {}", workstation));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let pc = ComputerBuilder::new()
            .cpu("cpu")
            .ram_gb(8)
            .storage_gb(256)
            .build()
            .unwrap();
        assert_eq!(pc.os, "Linux");
        assert_eq!(pc.gpu, None);
        assert_eq!(pc.to_string(), "cpu, 8 GB RAM, 256 GB storage, integrated graphics, running Linux");
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(
            ComputerBuilder::new().ram_gb(8).storage_gb(1).build(),
            Err(BuildError::MissingPart("cpu"))
        );
        assert_eq!(
            ComputerBuilder::new().cpu("c").ram_gb(8).build(),
            Err(BuildError::MissingPart("storage"))
        );
    }

    #[test]
    fn test_invalid_ram() {
        for gb in [0, 2, 24, 512] {
            assert_eq!(
                ComputerBuilder::new().cpu("c").ram_gb(gb).storage_gb(1).build(),
                Err(BuildError::InvalidRam(gb))
            );
        }
    }

    #[test]
    fn test_director_presets() {
        let director = Director;
        let gaming = director.gaming_rig(ComputerBuilder::new()).build().unwrap();
        assert_eq!(gaming.gpu.as_deref(), Some("RTX 4090"));
        assert_eq!(gaming.ram_gb, 64);

        let office = director.office_pc(ComputerBuilder::new()).build().unwrap();
        assert_eq!(office.gpu, None);
        assert_eq!(office.os, "Linux");
    }
}
