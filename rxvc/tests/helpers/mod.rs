//! Test doubles for receiver integrations
//!
//! `FakeReceiver` keeps its state in memory, records every operation that
//! would change the device and can be told to fail specific operations.
//! `FakeLocator` hands out fake receivers and counts cache traffic.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use receiver_api::{
    BasicStatus, LocatorError, MenuStatus, PlayStatus, ReceiverControl, ReceiverError, ReceiverLocator, Result,
};

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// An in-memory receiver
#[derive(Debug, Clone)]
pub struct FakeReceiver {
    pub name: String,
    status: RefCell<BasicStatus>,
    play: PlayStatus,
    menu: RefCell<MenuStatus>,
    playback_inputs: BTreeSet<String>,
    inputs: BTreeSet<String>,
    outputs: RefCell<BTreeMap<String, bool>>,
    zones: BTreeSet<String>,
    surround_programs: BTreeSet<String>,
    scenes: BTreeSet<String>,
    zone: RefCell<String>,
    surround_program: RefCell<String>,
    scene: RefCell<String>,
    failures: RefCell<HashMap<&'static str, ReceiverError>>,
    writes: RefCell<Vec<String>>,
    reads: Cell<usize>,
}

impl FakeReceiver {
    /// A powered-on receiver on NET RADIO at -20.0 dB
    pub fn new() -> Self {
        let mut outputs = BTreeMap::new();
        outputs.insert("zoneA".to_string(), true);
        outputs.insert("zoneB".to_string(), false);

        Self {
            name: "Living Room AVR".to_string(),
            status: RefCell::new(BasicStatus {
                power: true,
                input: "NET RADIO".to_string(),
                volume_db: -20.0,
                muted: false,
            }),
            play: PlayStatus {
                playing: true,
                artist: "Radiohead".to_string(),
                album: "OK Computer".to_string(),
                track: "Airbag".to_string(),
                station: "".to_string(),
            },
            menu: RefCell::new(MenuStatus::default()),
            playback_inputs: names(&["NET RADIO", "SERVER", "Spotify"]),
            inputs: names(&["AV1", "HDMI1", "HDMI2", "NET RADIO", "SERVER", "Spotify", "TUNER"]),
            outputs: RefCell::new(outputs),
            zones: names(&["Main_Zone", "Zone_2"]),
            surround_programs: names(&["2ch Stereo", "7ch Stereo", "Straight", "Surround Decoder"]),
            scenes: names(&["BD/DVD Movie Viewing", "Music Disc Listening", "TV Viewing"]),
            zone: RefCell::new("Main_Zone".to_string()),
            surround_program: RefCell::new("Straight".to_string()),
            scene: RefCell::new("TV Viewing".to_string()),
            failures: RefCell::new(HashMap::new()),
            writes: RefCell::new(Vec::new()),
            reads: Cell::new(0),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_volume(self, volume_db: f64) -> Self {
        self.status.borrow_mut().volume_db = volume_db;
        self
    }

    pub fn with_input(self, input: &str) -> Self {
        self.status.borrow_mut().input = input.to_string();
        self
    }

    pub fn with_power(self, on: bool) -> Self {
        self.status.borrow_mut().power = on;
        self
    }

    pub fn with_muted(self, muted: bool) -> Self {
        self.status.borrow_mut().muted = muted;
        self
    }

    pub fn with_menu(self, menu: MenuStatus) -> Self {
        *self.menu.borrow_mut() = menu;
        self
    }

    /// Make the named trait operation fail with `error` from now on
    pub fn failing(self, operation: &'static str, error: ReceiverError) -> Self {
        self.failures.borrow_mut().insert(operation, error);
        self
    }

    /// Every state-changing operation attempted so far, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// Number of read operations performed so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn total_calls(&self) -> usize {
        self.reads() + self.writes.borrow().len()
    }

    pub fn volume(&self) -> f64 {
        self.status.borrow().volume_db
    }

    pub fn output_enabled(&self, name: &str) -> Option<bool> {
        self.outputs.borrow().get(name).copied()
    }

    fn read(&self, operation: &'static str) -> Result<()> {
        self.reads.set(self.reads.get() + 1);
        self.check(operation)
    }

    fn write(&self, operation: &'static str, call: String) -> Result<()> {
        self.writes.borrow_mut().push(call);
        self.check(operation)
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        match self.failures.borrow().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl Default for FakeReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiverControl for FakeReceiver {
    fn basic_status(&self) -> Result<BasicStatus> {
        self.read("basic_status")?;
        Ok(self.status.borrow().clone())
    }

    fn play_status(&self) -> Result<PlayStatus> {
        self.read("play_status")?;
        Ok(self.play.clone())
    }

    fn menu_status(&self) -> Result<MenuStatus> {
        self.read("menu_status")?;
        Ok(self.menu.borrow().clone())
    }

    fn is_playback_supported(&self, input: &str) -> Result<bool> {
        self.read("is_playback_supported")?;
        Ok(self.playback_inputs.contains(input))
    }

    fn inputs(&self) -> Result<BTreeSet<String>> {
        self.read("inputs")?;
        Ok(self.inputs.clone())
    }

    fn outputs(&self) -> Result<BTreeMap<String, bool>> {
        self.read("outputs")?;
        Ok(self.outputs.borrow().clone())
    }

    fn zones(&self) -> Result<BTreeSet<String>> {
        self.read("zones")?;
        Ok(self.zones.clone())
    }

    fn surround_programs(&self) -> Result<BTreeSet<String>> {
        self.read("surround_programs")?;
        Ok(self.surround_programs.clone())
    }

    fn scenes(&self) -> Result<BTreeSet<String>> {
        self.read("scenes")?;
        Ok(self.scenes.clone())
    }

    fn zone(&self) -> Result<String> {
        self.read("zone")?;
        Ok(self.zone.borrow().clone())
    }

    fn surround_program(&self) -> Result<String> {
        self.read("surround_program")?;
        Ok(self.surround_program.borrow().clone())
    }

    fn scene(&self) -> Result<String> {
        self.read("scene")?;
        Ok(self.scene.borrow().clone())
    }

    fn set_power(&self, on: bool) -> Result<()> {
        self.write("set_power", format!("set_power {}", on))?;
        self.status.borrow_mut().power = on;
        Ok(())
    }

    fn set_input(&self, input: &str) -> Result<()> {
        self.write("set_input", format!("set_input {}", input))?;
        self.status.borrow_mut().input = input.to_string();
        Ok(())
    }

    fn set_output(&self, output: &str, enabled: bool) -> Result<()> {
        self.write("set_output", format!("set_output {} {}", output, enabled))?;
        self.outputs.borrow_mut().insert(output.to_string(), enabled);
        Ok(())
    }

    fn set_volume(&self, volume_db: f64) -> Result<()> {
        self.write("set_volume", format!("set_volume {:?}", volume_db))?;
        self.status.borrow_mut().volume_db = volume_db;
        Ok(())
    }

    fn fade_volume(&self, target_db: i32, delay_secs: f64) -> Result<()> {
        self.write("fade_volume", format!("fade_volume {} {:?}", target_db, delay_secs))?;
        self.status.borrow_mut().volume_db = f64::from(target_db);
        Ok(())
    }

    fn set_mute(&self, muted: bool) -> Result<()> {
        self.write("set_mute", format!("set_mute {}", muted))?;
        self.status.borrow_mut().muted = muted;
        Ok(())
    }

    fn set_zone(&self, zone: &str) -> Result<()> {
        self.write("set_zone", format!("set_zone {}", zone))?;
        *self.zone.borrow_mut() = zone.to_string();
        Ok(())
    }

    fn set_surround_program(&self, program: &str) -> Result<()> {
        self.write("set_surround_program", format!("set_surround_program {}", program))?;
        *self.surround_program.borrow_mut() = program.to_string();
        Ok(())
    }

    fn set_scene(&self, scene: &str) -> Result<()> {
        self.write("set_scene", format!("set_scene {}", scene))?;
        *self.scene.borrow_mut() = scene.to_string();
        Ok(())
    }

    fn play(&self) -> Result<()> {
        self.write("play", "play".to_string())
    }

    fn stop(&self) -> Result<()> {
        self.write("stop", "stop".to_string())
    }

    fn pause(&self) -> Result<()> {
        self.write("pause", "pause".to_string())
    }

    fn next(&self) -> Result<()> {
        self.write("next", "next".to_string())
    }

    fn previous(&self) -> Result<()> {
        self.write("previous", "previous".to_string())
    }

    fn menu_up(&self) -> Result<()> {
        self.write("menu_up", "menu_up".to_string())
    }

    fn menu_down(&self) -> Result<()> {
        self.write("menu_down", "menu_down".to_string())
    }

    fn menu_left(&self) -> Result<()> {
        self.write("menu_left", "menu_left".to_string())
    }

    fn menu_right(&self) -> Result<()> {
        self.write("menu_right", "menu_right".to_string())
    }

    fn menu_select(&self) -> Result<()> {
        self.write("menu_select", "menu_select".to_string())?;
        let mut menu = self.menu.borrow_mut();
        menu.layer += 1;
        Ok(())
    }

    fn menu_return(&self) -> Result<()> {
        self.write("menu_return", "menu_return".to_string())
    }
}

/// A ready NET RADIO menu with three entries, inserted out of order
pub fn ready_menu() -> MenuStatus {
    let mut entries = BTreeMap::new();
    entries.insert(3, "Pandora".to_string());
    entries.insert(1, "Bookmarks".to_string());
    entries.insert(2, "Locations".to_string());

    MenuStatus {
        ready: true,
        layer: 1,
        name: "NET RADIO".to_string(),
        current_line: 1,
        max_line: 3,
        entries,
    }
}

/// A locator with an optional cached receiver and a discoverable one
#[derive(Debug)]
pub struct FakeLocator {
    cached: RefCell<Option<FakeReceiver>>,
    discoverable: Option<FakeReceiver>,
    misses_before_found: Cell<u32>,
    finds: Cell<u32>,
    clears: Cell<u32>,
    stores: Cell<u32>,
}

impl FakeLocator {
    /// Nothing cached; discovery finds `receiver` straight away
    pub fn discovering(receiver: FakeReceiver) -> Self {
        Self {
            cached: RefCell::new(None),
            discoverable: Some(receiver),
            misses_before_found: Cell::new(0),
            finds: Cell::new(0),
            clears: Cell::new(0),
            stores: Cell::new(0),
        }
    }

    /// Nothing cached and nothing to discover
    pub fn empty() -> Self {
        Self {
            discoverable: None,
            ..Self::discovering(FakeReceiver::new())
        }
    }

    pub fn with_cached(self, receiver: FakeReceiver) -> Self {
        *self.cached.borrow_mut() = Some(receiver);
        self
    }

    /// Discovery reports nothing found this many times before succeeding
    pub fn with_misses(self, misses: u32) -> Self {
        self.misses_before_found.set(misses);
        self
    }

    pub fn cached_name(&self) -> Option<String> {
        self.cached.borrow().as_ref().map(|r| r.name.clone())
    }

    pub fn finds(&self) -> u32 {
        self.finds.get()
    }

    pub fn clears(&self) -> u32 {
        self.clears.get()
    }

    pub fn stores(&self) -> u32 {
        self.stores.get()
    }
}

impl ReceiverLocator for FakeLocator {
    type Receiver = FakeReceiver;

    fn find_receiver(&self) -> std::result::Result<FakeReceiver, LocatorError> {
        self.finds.set(self.finds.get() + 1);

        let misses = self.misses_before_found.get();
        if misses > 0 {
            self.misses_before_found.set(misses - 1);
            return Err(LocatorError::NotFound);
        }

        self.discoverable.clone().ok_or(LocatorError::NotFound)
    }

    fn cached_receiver(&self) -> std::result::Result<Option<FakeReceiver>, LocatorError> {
        Ok(self.cached.borrow().clone())
    }

    fn cache_receiver(&self, receiver: &FakeReceiver) -> std::result::Result<(), LocatorError> {
        self.stores.set(self.stores.get() + 1);
        *self.cached.borrow_mut() = Some(receiver.clone());
        Ok(())
    }

    fn clear_cache(&self) -> std::result::Result<(), LocatorError> {
        self.clears.set(self.clears.get() + 1);
        *self.cached.borrow_mut() = None;
        Ok(())
    }
}
