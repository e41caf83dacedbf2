use crate::clock::AthleteClock;
use lift_common::{
    config::Config,
    event::EngineEvent,
    labels::Translations,
    scoreboard::ScoreboardViewModel,
    view_state::{Lifecycle, ViewStateController},
};
use log::*;

pub type Panel = ViewStateController<AthleteClock>;

/// Everything the render loop draws from. Lives on the UI thread only.
pub struct Scoreboard {
    pub panels: Vec<Panel>,
    pub view: ScoreboardViewModel,
    pub decisions: [Option<bool>; 3],
    pub translations: Translations,
    default_allowance: u32,
}

impl Scoreboard {
    pub fn new(config: &Config) -> Self {
        let default_allowance = u32::from(config.timing.attempt_allowance);
        let mut panels: Vec<Panel> = Vec::new();
        for layout in &config.display.panels {
            if panels.iter().any(|p| p.layout() == *layout) {
                warn!("Panel {layout} listed twice in the config, ignoring the repeat");
                continue;
            }
            let mut panel = Panel::new(*layout, AthleteClock::new(default_allowance));
            panel.on_attach();
            panels.push(panel);
        }

        Self {
            panels,
            view: ScoreboardViewModel::default(),
            decisions: [None; 3],
            translations: Translations::default(),
            default_allowance,
        }
    }

    pub fn apply(&mut self, event: EngineEvent) {
        trace!("Handling event: {event:?}");
        match event {
            EngineEvent::Transition { phase, .. } => {
                for panel in self.panels.iter_mut().filter(|p| event.addresses(p.layout())) {
                    panel.apply_phase(phase);
                }
            }
            EngineEvent::Update { view } => {
                let allowance = view.time_allowed.unwrap_or(self.default_allowance);
                for panel in &mut self.panels {
                    panel.countdown_mut().set_allowance(allowance);
                }
                self.view = *view;
            }
            EngineEvent::Inactive { hidden } => {
                for panel in &mut self.panels {
                    panel.set_inactive(hidden);
                }
            }
            EngineEvent::Decisions { lights } => self.decisions = lights,
            EngineEvent::Translations { labels } => {
                info!("Received {} translated labels", labels.len());
                self.translations = labels;
            }
        }
    }

    pub fn detach_all(&mut self) {
        for panel in &mut self.panels {
            panel.on_detach();
        }
    }
}
