// Pattern: Bridge.
// Remotes (the abstraction) and devices (the implementation) vary
// independently; a remote holds any `Device` behind a box.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "bridge",
    topic: Topic::Structural,
    summary: "Basic and advanced remotes driving any TV or radio",
    run,
};

pub const MAX_VOLUME: u8 = 100;

pub trait Device {
    fn name(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    /// Implementations clamp to `MAX_VOLUME`.
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u16;
    fn set_channel(&mut self, channel: u16);

    fn status(&self) -> String {
        format!(
            "{} is {}, volume {}, channel {}",
            self.name(),
            if self.is_enabled() { "on" } else { "off" },
            self.volume(),
            self.channel()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DeviceState {
    on: bool,
    volume: u8,
    channel: u16,
}

impl DeviceState {
    fn new(volume: u8, channel: u16) -> Self {
        Self {
            on: false,
            volume,
            channel,
        }
    }
}

pub struct Tv {
    state: DeviceState,
}

pub struct Radio {
    state: DeviceState,
}

impl Tv {
    pub fn new() -> Self {
        Self {
            state: DeviceState::new(30, 1),
        }
    }
}

impl Radio {
    pub fn new() -> Self {
        Self {
            state: DeviceState::new(20, 88),
        }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }

    fn is_enabled(&self) -> bool {
        self.state.on
    }

    fn enable(&mut self) {
        self.state.on = true;
    }

    fn disable(&mut self) {
        self.state.on = false;
    }

    fn volume(&self) -> u8 {
        self.state.volume
    }

    fn set_volume(&mut self, volume: u8) {
        self.state.volume = volume.min(MAX_VOLUME);
    }

    fn channel(&self) -> u16 {
        self.state.channel
    }

    // channels 1..=999
    fn set_channel(&mut self, channel: u16) {
        self.state.channel = channel.clamp(1, 999);
    }
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "Radio"
    }

    fn is_enabled(&self) -> bool {
        self.state.on
    }

    fn enable(&mut self) {
        self.state.on = true;
    }

    fn disable(&mut self) {
        self.state.on = false;
    }

    fn volume(&self) -> u8 {
        self.state.volume
    }

    fn set_volume(&mut self, volume: u8) {
        self.state.volume = volume.min(MAX_VOLUME);
    }

    fn channel(&self) -> u16 {
        self.state.channel
    }

    // FM band, 88..=108
    fn set_channel(&mut self, channel: u16) {
        self.state.channel = channel.clamp(88, 108);
    }
}

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_up(&mut self) {
        let v = self.device.volume().saturating_add(10);
        self.device.set_volume(v);
    }

    pub fn volume_down(&mut self) {
        let v = self.device.volume().saturating_sub(10);
        self.device.set_volume(v);
    }

    pub fn channel_up(&mut self) {
        let c = self.device.channel().saturating_add(1);
        self.device.set_channel(c);
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }
}

/// Extends the abstraction without touching any device.
pub struct AdvancedRemote {
    remote: RemoteControl,
    volume_before_mute: Option<u8>,
}

impl AdvancedRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
            volume_before_mute: None,
        }
    }

    pub fn basic(&mut self) -> &mut RemoteControl {
        &mut self.remote
    }

    /// Mutes, or restores the previous volume if already muted.
    pub fn toggle_mute(&mut self) {
        match self.volume_before_mute.take() {
            Some(previous) => self.remote.device.set_volume(previous),
            None => {
                self.volume_before_mute = Some(self.remote.device.volume());
                self.remote.device.set_volume(0);
            }
        }
    }

    pub fn device(&self) -> &dyn Device {
        self.remote.device()
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Bridge");

    let devices: Vec<Box<dyn Device>> = vec![Box::new(Tv::new()), Box::new(Radio::new())];
    for device in devices {
        let mut remote = RemoteControl::new(device);
        remote.toggle_power();
        remote.volume_up();
        remote.channel_up();
        session.result(format!("basic remote: {}", remote.device().status()));
    }

    let mut advanced = AdvancedRemote::new(Box::new(Tv::new()));
    advanced.basic().toggle_power();
    for _ in 0..10 {
        advanced.basic().volume_up();
    }
    session.result(format!("advanced remote, volume maxed: {}", advanced.device().status()));
    advanced.toggle_mute();
    session.result(format!("muted: {}", advanced.device().status()));
    advanced.toggle_mute();
    session.result(format!("unmuted: {}", advanced.device().status()));
    Ok(())
}
