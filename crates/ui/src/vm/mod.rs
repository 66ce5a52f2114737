mod practice_vm;

pub use practice_vm::{
    PracticeCardVm, ScorePanelVm, map_practice_card, map_score_panel, progress_label,
};
