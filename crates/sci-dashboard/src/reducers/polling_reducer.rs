use crate::actions::PollingAction;
use crate::domain_models::PollingPhase;

pub fn reduce_polling(_phase: PollingPhase, action: &PollingAction) -> PollingPhase {
    match action {
        PollingAction::Started => PollingPhase::Polling,
        PollingAction::Stopped => PollingPhase::Idle,
    }
}
