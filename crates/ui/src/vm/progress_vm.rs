use study_core::model::ProgressRecord;

use crate::vm::format_percentage;

/// Display-ready values of a progress summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressCardVm {
    /// Raw percentage, drives the bar width.
    pub completion_percentage: f64,
    pub completion_label: String,
    pub modules_completed: usize,
    pub study_time_label: String,
    pub average_score_label: String,
    pub flashcards_reviewed: u32,
}

impl From<&ProgressRecord> for ProgressCardVm {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            completion_percentage: record.completion_percentage,
            completion_label: format_percentage(record.completion_percentage),
            modules_completed: record.modules_completed.len(),
            study_time_label: format!("{} min", record.total_study_time),
            average_score_label: format_percentage(record.average_score),
            flashcards_reviewed: record.flashcards_reviewed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::ModuleId;

    #[test]
    fn maps_record_to_labels() {
        let record = ProgressRecord {
            completion_percentage: 66.666,
            modules_completed: vec![ModuleId::new("m1").unwrap(), ModuleId::new("m2").unwrap()],
            average_score: 79.5,
            total_study_time: 125,
            flashcards_reviewed: 40,
            ..ProgressRecord::default()
        };

        let vm = ProgressCardVm::from(&record);

        assert_eq!(vm.completion_label, "67%");
        assert_eq!(vm.modules_completed, 2);
        assert_eq!(vm.study_time_label, "125 min");
        assert_eq!(vm.average_score_label, "80%");
        assert_eq!(vm.flashcards_reviewed, 40);
    }
}
