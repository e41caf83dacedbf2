use crate::{
    phase::Phase,
    region::{Layout, Region, Visibility},
    visibility_table::RegionVisibilitySet,
};
use indexmap::IndexMap;
use log::*;

/// The athlete countdown that a panel starts and resets. The panel never
/// reads the time itself.
pub trait AthleteCountdown {
    fn start(&mut self);
    fn reset(&mut self);
}

/// Attach/detach notifications from whatever hosts a panel on screen
pub trait Lifecycle {
    fn on_attach(&mut self);
    fn on_detach(&mut self);
}

/// Owns the regions of one panel and applies phase transitions to them.
///
/// Every transition writes all of the layout's regions from one row of the
/// [`RegionVisibilitySet`] before returning, so callers never observe a
/// half-applied phase. Any phase may follow any other; ordering is the
/// engine's business.
#[derive(Debug)]
pub struct ViewStateController<T> {
    table: RegionVisibilitySet,
    phase: Phase,
    regions: IndexMap<Region, Visibility>,
    inactive: bool,
    attached: bool,
    countdown: T,
}

impl<T: AthleteCountdown> ViewStateController<T> {
    /// Creates the controller in the `Ready` phase
    pub fn new(layout: Layout, countdown: T) -> Self {
        let mut controller = Self {
            table: RegionVisibilitySet::for_layout(layout),
            phase: Phase::Ready,
            regions: layout
                .regions()
                .map(|region| (region, Visibility::default()))
                .collect(),
            inactive: false,
            attached: false,
            countdown,
        };
        controller.write_row(Phase::Ready);
        controller
    }

    pub fn initialize(&mut self) {
        self.apply_phase(Phase::Ready);
    }

    pub fn start_timer(&mut self) {
        self.apply_phase(Phase::Start);
    }

    pub fn reset_state(&mut self) {
        self.apply_phase(Phase::Reset);
    }

    pub fn show_decision(&mut self) {
        self.apply_phase(Phase::Down);
    }

    pub fn enter_break(&mut self) {
        self.apply_phase(Phase::Break);
    }

    pub fn complete_group(&mut self) {
        self.apply_phase(Phase::GroupDone);
    }

    pub fn show_referee_decision(&mut self) {
        self.apply_phase(Phase::RefereeDecision);
    }

    /// Moves to `phase`, signalling the countdown for `Start` and `Reset`.
    /// Re-applying the current phase is allowed and changes nothing.
    pub fn apply_phase(&mut self, phase: Phase) {
        debug!("{}: {} -> {}", self.layout(), self.phase, phase);
        match phase {
            Phase::Ready => self.inactive = false,
            Phase::Start => self.countdown.start(),
            Phase::Reset => self.countdown.reset(),
            _ => {}
        }
        self.write_row(phase);
        self.phase = phase;
    }

    fn write_row(&mut self, phase: Phase) {
        for (region, rule) in self.table.row(phase) {
            if let Some(visibility) = self.regions.get_mut(&region) {
                *visibility = rule.apply(*visibility);
            }
        }
    }
}

impl<T> ViewStateController<T> {
    pub fn layout(&self) -> Layout {
        self.table.layout()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `None` if the layout doesn't carry `region`
    pub fn visibility(&self, region: Region) -> Option<Visibility> {
        self.regions.get(&region).copied()
    }

    /// Regions this layout doesn't carry are never visible
    pub fn is_visible(&self, region: Region) -> bool {
        self.visibility(region).is_some_and(Visibility::is_visible)
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, Visibility)> + '_ {
        self.regions.iter().map(|(r, v)| (*r, *v))
    }

    /// Set by the engine when the platform has no group lifting. While
    /// inactive only the waiting banner shows; region states are kept and
    /// come back as they were when the flag clears.
    pub fn set_inactive(&mut self, inactive: bool) {
        if self.inactive != inactive {
            info!("{}: platform inactive = {inactive}", self.layout());
        }
        self.inactive = inactive;
    }

    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    pub fn waiting_banner_visible(&self) -> bool {
        self.inactive
    }

    pub fn attempt_bar_visible(&self) -> bool {
        !self.inactive
    }

    /// Results and leaders tables are gated exactly like the attempt bar
    pub fn results_visible(&self) -> bool {
        self.attempt_bar_visible()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn countdown(&self) -> &T {
        &self.countdown
    }

    pub fn countdown_mut(&mut self) -> &mut T {
        &mut self.countdown
    }
}

impl<T: AthleteCountdown> Lifecycle for ViewStateController<T> {
    fn on_attach(&mut self) {
        info!("{} panel attached", self.layout());
        self.attached = true;
        self.initialize();
    }

    fn on_detach(&mut self) {
        info!("{} panel detached", self.layout());
        self.attached = false;
    }
}
