use crate::feedback::intent::FeedbackIntent;
use crate::feedback::state::FeedbackState;
use crate::mvi::Reducer;

pub struct FeedbackReducer;

impl Reducer for FeedbackReducer {
    type State = FeedbackState;
    type Intent = FeedbackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedbackIntent::Loaded { feedbacks } => FeedbackState {
                feedbacks,
                loaded: true,
                ..state
            },
            FeedbackIntent::SubmitStarted => FeedbackState {
                in_flight: state.in_flight + 1,
                ..state
            },
            FeedbackIntent::Submitted { feedback } => {
                let mut feedbacks = state.feedbacks;
                feedbacks.insert(0, feedback);
                FeedbackState {
                    feedbacks,
                    in_flight: state.in_flight.saturating_sub(1),
                    ..state
                }
            }
        }
    }
}
