//! Deterministic decision procedure mapping a final tally to a course.

use crate::core::types::{ResultId, Tally};

/// Pick the recommended course for a finalized tally.
///
/// Rules are evaluated in priority order; the first match wins:
/// 1. `d >= 2` → `premium` (premium-seeking preempts everything else)
/// 2. `b >= 2` and `b > c` → `hair`
/// 3. `c >= 2` and `c > b` → `scalp`
/// 4. `a >= 3` → `relax`
/// 5. `a > b` and `a > c` → `relax`
/// 6. otherwise → `balance`
///
/// Rules 2/3 require strict dominance, so a B/C tie falls through to the
/// A-based rules. Rules 4 and 5 are deliberately separate: `a=3, b=3` passes
/// the absolute threshold but fails dominance, and must still yield `relax`.
pub fn recommend(tally: &Tally) -> ResultId {
    if tally.d >= 2 {
        return ResultId::Premium;
    }
    if tally.b >= 2 && tally.b > tally.c {
        return ResultId::Hair;
    }
    if tally.c >= 2 && tally.c > tally.b {
        return ResultId::Scalp;
    }
    if tally.a >= 3 {
        return ResultId::Relax;
    }
    if tally.a > tally.b && tally.a > tally.c {
        return ResultId::Relax;
    }
    ResultId::Balance
}
