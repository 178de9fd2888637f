//! Phase driver - runs every active condition's effects for one phase

use super::session::CombatSession;
use crate::condition::{Condition, ConditionRegistry};
use crate::effect::EffectResult;
use crate::message::Message;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use content_core::{Technique, TechniqueDb};
use rand::RngCore;
use tracing::{debug, trace};

/// A technique forced on a monster in place of its chosen one
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub monster: MonsterId,
    pub technique: Technique,
}

/// Everything that happened while resolving one phase
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: Phase,
    /// Raw result of every effect invocation, in evaluation order
    pub results: Vec<(MonsterId, EffectResult)>,
    /// Conditions attached from effect results
    pub attached: Vec<(MonsterId, String)>,
    pub substitutions: Vec<Substitution>,
    pub messages: Vec<Message>,
}

impl PhaseReport {
    fn new(phase: Phase) -> Self {
        PhaseReport {
            phase,
            results: Vec::new(),
            attached: Vec::new(),
            substitutions: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Number of effects that triggered
    pub fn triggered(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.success).count()
    }
}

/// Resolve one phase for every monster in the session
///
/// Monsters are visited in roster order and their conditions in attachment
/// order. The status list is snapshotted per monster, so conditions attached
/// during the phase wait for the next one and conditions removed by an
/// earlier effect are skipped. The first effect error aborts the phase.
pub fn resolve_phase(
    session: &mut CombatSession,
    phase: Phase,
    techniques: &TechniqueDb,
    conditions: &ConditionRegistry,
    rng: &mut dyn RngCore,
) -> Result<PhaseReport, EffectError> {
    trace!(turn = session.turn, phase = %phase, "resolving phase");
    let mut report = PhaseReport::new(phase);

    for monster in session.roster.monster_ids() {
        let slugs = session.roster.monster(monster)?.status.slugs();
        for slug in slugs {
            for effect in conditions.effects(&slug)? {
                let Some(condition) = enter_phase(session, monster, &slug, phase)? else {
                    break;
                };

                let result = {
                    let mut ctx = session.effect_context(techniques, conditions, &mut *rng);
                    effect.apply(&condition, monster, &mut ctx)?
                };
                collect(session, &mut report, monster, result)?;
            }
        }
    }

    Ok(report)
}

/// Stamp the phase on the live condition and hand back a copy to evaluate
fn enter_phase(
    session: &mut CombatSession,
    monster: MonsterId,
    slug: &str,
    phase: Phase,
) -> Result<Option<Condition>, EffectError> {
    let status = &mut session.roster.monster_mut(monster)?.status;
    Ok(status.get_mut(slug).map(|condition| {
        condition.phase = Some(phase);
        condition.clone()
    }))
}

fn collect(
    session: &mut CombatSession,
    report: &mut PhaseReport,
    monster: MonsterId,
    mut result: EffectResult,
) -> Result<(), EffectError> {
    for condition in result.conditions.drain(..) {
        let slug = condition.slug.clone();
        if session.attach(monster, condition)? {
            debug!(monster = %monster, condition = %slug, "condition attached");
            report.attached.push((monster, slug));
        }
    }

    for technique in result.techniques.drain(..) {
        session.flags.set_action_tech(monster, technique.slug.clone());
        report.substitutions.push(Substitution { monster, technique });
    }

    report.messages.extend(result.extras.iter().cloned());
    report.results.push((monster, result));
    Ok(())
}
