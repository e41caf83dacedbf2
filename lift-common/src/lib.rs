pub mod region;

pub mod phase;

pub mod visibility_table;

pub mod view_state;

pub mod scoreboard;

pub mod labels;

pub mod event;

pub mod config;

pub mod drawing_support {
    pub const MAX_STRINGABLE_SECS: u32 = 5999;
}
