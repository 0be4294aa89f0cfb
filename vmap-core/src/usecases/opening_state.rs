use time::Duration;

use crate::{OpeningHoursEvaluator, Phrase, PrettifyOptions, TranslationGateway};

use super::prelude::*;

/// Horizon for the "soon" states. Fixed, not configurable per call.
pub const FUTURE_STATE_HORIZON: Duration = Duration::minutes(60);

/// The live open/closed indicator of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OpenState {
    Open,
    ClosesSoon,
    Closed,
    OpensSoon,
}

/// Pure four-way derivation from the current and the future evaluation.
pub const fn derive_open_state(open_now: bool, open_in_one_hour: bool) -> OpenState {
    match (open_now, open_in_one_hour) {
        (true, true) => OpenState::Open,
        (true, false) => OpenState::ClosesSoon,
        (false, false) => OpenState::Closed,
        (false, true) => OpenState::OpensSoon,
    }
}

/// Queries the evaluator now and 60 minutes in the future.
pub fn evaluate_open_state<E: OpeningHoursEvaluator>(evaluator: &E, now: Timestamp) -> OpenState {
    derive_open_state(
        evaluator.is_open(now),
        evaluator.is_open(now + FUTURE_STATE_HORIZON),
    )
}

/// Localized status phrase, e.g. "open, will close soon".
pub fn open_state_phrase<T: TranslationGateway>(state: OpenState, i18n: &T) -> String {
    match state {
        OpenState::Open => i18n.translate(Phrase::Open),
        OpenState::ClosesSoon => format!(
            "{}{}",
            i18n.translate(Phrase::Open),
            i18n.translate(Phrase::WillCloseSoon)
        ),
        OpenState::Closed => i18n.translate(Phrase::Closed),
        OpenState::OpensSoon => format!(
            "{}{}",
            i18n.translate(Phrase::Closed),
            i18n.translate(Phrase::WillOpenSoon)
        ),
    }
}

/// Prettified rule text with display post-processing: commas get a trailing
/// space and the public-holiday marker token is replaced by its localized
/// phrase.
pub fn prettified_rules<E, T>(evaluator: &E, options: &PrettifyOptions, i18n: &T) -> String
where
    E: OpeningHoursEvaluator,
    T: TranslationGateway,
{
    evaluator
        .prettify(options)
        .replace(',', ", ")
        .replace("PH", &i18n.translate(Phrase::PublicHoliday))
}
