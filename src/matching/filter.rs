use tracing::debug;

use super::query::StartupQuery;
use super::types::CandidateMatch;
use crate::catalog::StoredInvestor;

/// Why a candidate was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Stored ticket bounds were missing or not numeric.
    MalformedTicketBounds,
    FundingAskOutsideTicket {
        ask_usd: f64,
        min_usd: f64,
        max_usd: f64,
    },
    StageNotTargeted {
        stage: String,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MalformedTicketBounds => write!(f, "malformed ticket bounds"),
            Rejection::FundingAskOutsideTicket {
                ask_usd,
                min_usd,
                max_usd,
            } => write!(f, "ask {ask_usd} outside ticket [{min_usd}, {max_usd}]"),
            Rejection::StageNotTargeted { stage } => write!(f, "stage '{stage}' not targeted"),
        }
    }
}

/// Applies the hard constraints for one investor.
///
/// Each dimension is checked only when the startup supplies it: with no funding ask the
/// ticket range (malformed or not) is ignored, and with no stage the stage focus is ignored.
pub fn check_admissible(startup: &StartupQuery, investor: &StoredInvestor) -> Result<(), Rejection> {
    if let Some(ask_usd) = startup.funding_ask_usd() {
        let ticket = investor.ticket.ok_or(Rejection::MalformedTicketBounds)?;
        if !ticket.contains(ask_usd) {
            return Err(Rejection::FundingAskOutsideTicket {
                ask_usd,
                min_usd: ticket.min_usd,
                max_usd: ticket.max_usd,
            });
        }
    }

    if let Some(stage) = startup.stage()
        && !investor.targets_stage(stage)
    {
        return Err(Rejection::StageNotTargeted {
            stage: stage.to_string(),
        });
    }

    Ok(())
}

/// Keeps admissible candidates in their incoming order, up to `k` of them.
pub fn filter_candidates(
    startup: &StartupQuery,
    candidates: Vec<CandidateMatch>,
    k: usize,
) -> Vec<CandidateMatch> {
    candidates
        .into_iter()
        .filter(|candidate| match check_admissible(startup, &candidate.investor) {
            Ok(()) => true,
            Err(rejection) => {
                debug!(
                    investor_id = %candidate.investor.id,
                    similarity = candidate.similarity,
                    reason = %rejection,
                    "Candidate excluded"
                );
                false
            }
        })
        .take(k)
        .collect()
}
