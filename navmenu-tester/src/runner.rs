use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use navmenu_core::{
    EventResponse, MenuController, MenuEvent, MenuTree, NodeId, SimulatedSurface, Viewport,
};
use serde::{Deserialize, Serialize};

use crate::scenario::{Action, Expect, Scenario};

/// Outcome of replaying one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub failures: Vec<String>,
    pub duration: Duration,
    /// Open nodes after the last step.
    pub final_open: Vec<String>,
}

/// Replay a scenario against a fresh controller and simulated surface.
///
/// Setup problems (bad outline, unknown node names) are reported as failures
/// rather than errors so a batch run always produces a full report.
#[must_use]
pub fn run_scenario(scenario: &Scenario, verbose: bool) -> ScenarioResult {
    let start = Instant::now();
    let mut failures = Vec::new();
    let mut steps_run = 0;
    let mut final_open = Vec::new();

    match Replay::new(scenario) {
        Ok(mut replay) => {
            for (idx, step) in scenario.steps.iter().enumerate() {
                steps_run += 1;
                let response = match replay.perform(&step.action) {
                    Ok(response) => response,
                    Err(err) => {
                        failures.push(format!("step {}: {err:#}", idx + 1));
                        break;
                    }
                };
                if verbose {
                    println!(
                        "  step {}: {:?} -> open {:?}",
                        idx + 1,
                        step.action,
                        replay.open_names()
                    );
                }
                if let Some(expect) = &step.expect {
                    for problem in replay.check(expect, response) {
                        failures.push(format!("step {}: {problem}", idx + 1));
                    }
                }
            }
            final_open = replay.open_names();
        }
        Err(err) => failures.push(format!("setup: {err:#}")),
    }

    log::debug!(
        "scenario {} finished with {} failures",
        scenario.name,
        failures.len()
    );
    ScenarioResult {
        scenario_name: scenario.name.clone(),
        passed: failures.is_empty(),
        steps_run,
        failures,
        duration: start.elapsed(),
        final_open,
    }
}

struct Replay {
    controller: MenuController,
    surface: SimulatedSurface,
}

impl Replay {
    fn new(scenario: &Scenario) -> Result<Self> {
        let tree = MenuTree::from_outline(&scenario.menu).context("invalid menu outline")?;
        let config = scenario.config.unwrap_or_default();
        config.validate().context("invalid scenario config")?;

        let mut surface = SimulatedSurface::new(Viewport::new(scenario.viewport));
        for (name, rect) in &scenario.rects {
            surface.set_rect(resolve(&tree, name)?, *rect);
        }
        for (name, offset) in &scenario.right_anchors {
            surface = surface.with_right_anchor(resolve(&tree, name)?, *offset);
        }

        Ok(Self {
            controller: MenuController::new(tree, config),
            surface,
        })
    }

    fn node(&self, name: &str) -> Result<NodeId> {
        resolve(self.controller.tree(), name)
    }

    fn perform(&mut self, action: &Action) -> Result<EventResponse> {
        let event = match action {
            Action::Hover { node } => MenuEvent::PointerEnter {
                node: self.node(node)?,
            },
            Action::Leave { node } => MenuEvent::PointerLeave {
                node: self.node(node)?,
            },
            Action::Tap { node, target } => MenuEvent::Tap {
                node: self.node(node)?,
                target: *target,
            },
            Action::Click { inside } => MenuEvent::DocumentClick {
                container: inside.as_deref().map(|n| self.node(n)).transpose()?,
            },
            Action::Resize { width } => {
                self.surface.set_viewport(Viewport::new(*width));
                MenuEvent::Resize
            }
            Action::CloseAll => {
                self.controller.close_all_open_menus(&mut self.surface);
                return Ok(EventResponse::PASS);
            }
            Action::Reposition { node } => {
                let id = self.node(node)?;
                self.controller.check_and_reposition(id, &mut self.surface);
                return Ok(EventResponse::PASS);
            }
        };
        Ok(self.controller.dispatch(event, &mut self.surface))
    }

    fn names(&self, ids: impl IntoIterator<Item = NodeId>) -> BTreeSet<String> {
        ids.into_iter()
            .map(|id| self.controller.tree().describe(id))
            .collect()
    }

    fn open_names(&self) -> Vec<String> {
        self.names(self.controller.state().open_nodes())
            .into_iter()
            .collect()
    }

    fn check(&self, expect: &Expect, response: EventResponse) -> Vec<String> {
        let mut problems = Vec::new();
        let state = self.controller.state();

        if let Some(open) = &expect.open {
            let actual = self.names(state.open_nodes());
            let wanted: BTreeSet<String> = open.iter().cloned().collect();
            if actual != wanted {
                problems.push(format!("open {actual:?}, expected {wanted:?}"));
            }
        }
        if let Some(repositioned) = &expect.repositioned {
            let actual = self.names(
                self.controller
                    .tree()
                    .ids()
                    .filter(|id| state.is_repositioned(*id)),
            );
            let wanted: BTreeSet<String> = repositioned.iter().cloned().collect();
            if actual != wanted {
                problems.push(format!("repositioned {actual:?}, expected {wanted:?}"));
            }
        }
        if let Some(consumed) = expect.consumed {
            let actual = response == EventResponse::CONSUMED;
            if actual != consumed {
                problems.push(format!("event consumed = {actual}, expected {consumed}"));
            }
        }
        for id in self.controller.tree().ids() {
            if state.get(id) != self.surface.rendered(id) {
                problems.push(format!(
                    "{} rendered {:?} but controller holds {:?}",
                    self.controller.tree().describe(id),
                    self.surface.rendered(id),
                    state.get(id)
                ));
            }
        }
        problems
    }
}

fn resolve(tree: &MenuTree, name: &str) -> Result<NodeId> {
    tree.lookup(name)
        .ok_or_else(|| anyhow!("unknown menu node `{name}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_scenario, list_scenarios};
    use crate::scenario::Step;

    #[test]
    fn built_in_scenarios_pass() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).unwrap();
            let result = run_scenario(&scenario, false);
            assert!(result.passed, "{key} failed: {:?}", result.failures);
            assert_eq!(result.steps_run, scenario.steps.len());
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let mut scenario = get_scenario("tap-toggle").unwrap();
        scenario
            .steps
            .push(Step::new(Action::tap("about")).expecting(Expect::open(&["lgus", "about"])));
        let result = run_scenario(&scenario, false);
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].starts_with("step 4: open"));
        assert_eq!(result.final_open, vec!["about".to_string()]);
    }

    #[test]
    fn unknown_node_stops_the_replay() {
        let mut scenario = get_scenario("tap-close").unwrap();
        scenario.steps.insert(0, Step::new(Action::tap("nowhere")));
        let result = run_scenario(&scenario, false);
        assert!(!result.passed);
        assert_eq!(result.steps_run, 1);
        assert!(result.failures[0].contains("unknown menu node `nowhere`"));
    }

    #[test]
    fn bad_rect_name_fails_setup() {
        let mut scenario = get_scenario("tap-close").unwrap();
        scenario
            .rects
            .insert("ghost".to_string(), navmenu_core::Rect::default());
        let result = run_scenario(&scenario, false);
        assert!(!result.passed);
        assert_eq!(result.steps_run, 0);
        assert!(result.failures[0].starts_with("setup:"));
    }
}
