use crate::snapshot::Snapshot;
use serde::Serialize;

pub const TOTAL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize)]
pub struct AuditFinding {
    pub id: String,
    pub entrant_name: String,
    pub judge_name: String,
    pub body: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }
}

/// Cross-checks the vote set against the festival's judge assignments and
/// the rubric's criteria: missing votes, incomplete votes, and stored
/// totals that disagree with the raw scores. Aggregation itself never looks
/// at any of this; an unscored criterion still rolls up as zero there.
pub fn audit(snapshot: &Snapshot) -> AuditReport {
    let criterion_ids = snapshot.rubric.criterion_ids();
    let mut findings = Vec::new();

    for entrant in &snapshot.festival.entrants {
        for judge in &snapshot.festival.judges {
            let vote = snapshot
                .votes
                .iter()
                .find(|vote| vote.entrant_id == entrant.id && vote.judge_id == judge.id);

            let Some(vote) = vote else {
                findings.push(AuditFinding {
                    id: "audit.missing_vote".to_string(),
                    entrant_name: entrant.name.clone(),
                    judge_name: judge.name.clone(),
                    body: format!("{} has not submitted a vote for {}", judge.name, entrant.name),
                    blocking: true,
                });
                continue;
            };

            if !vote.covers_all(criterion_ids.iter().copied()) {
                let mut body = format!(
                    "vote from {} for {} leaves criteria unscored; those criteria count as zero",
                    judge.name, entrant.name
                );
                if vote.is_complete {
                    body.push_str(" (stored completeness flag disagrees)");
                }
                if !vote.comment.is_empty() {
                    body.push_str(&format!(" [judge comment: {}]", vote.comment));
                }
                findings.push(AuditFinding {
                    id: "audit.incomplete_vote".to_string(),
                    entrant_name: entrant.name.clone(),
                    judge_name: judge.name.clone(),
                    body,
                    blocking: false,
                });
            }

            let recomputed = vote.computed_total();
            if (vote.total_score - recomputed).abs() > TOTAL_TOLERANCE {
                findings.push(AuditFinding {
                    id: "audit.total_mismatch".to_string(),
                    entrant_name: entrant.name.clone(),
                    judge_name: judge.name.clone(),
                    body: format!(
                        "stored total {} does not match the recomputed sum {} for {}'s vote on {}",
                        vote.total_score, recomputed, judge.name, entrant.name
                    ),
                    blocking: false,
                });
            }
        }
    }

    // Votes naming an entrant or judge outside the rosters never join the
    // aggregation, so they would vanish silently without a finding here.
    let entrant_ids: Vec<&str> = snapshot
        .festival
        .entrants
        .iter()
        .map(|entrant| entrant.id.as_str())
        .collect();
    let judge_ids: Vec<&str> = snapshot
        .festival
        .judges
        .iter()
        .map(|judge| judge.id.as_str())
        .collect();
    for vote in &snapshot.votes {
        if !entrant_ids.contains(&vote.entrant_id.as_str()) {
            findings.push(AuditFinding {
                id: "audit.orphan_vote".to_string(),
                entrant_name: vote.entrant_name.clone(),
                judge_name: vote.judge_id.clone(),
                body: format!(
                    "vote for '{}' (id {}) does not match any registered entrant and will not count",
                    vote.entrant_name, vote.entrant_id
                ),
                blocking: false,
            });
        }
        if !judge_ids.contains(&vote.judge_id.as_str()) {
            findings.push(AuditFinding {
                id: "audit.unassigned_judge".to_string(),
                entrant_name: vote.entrant_name.clone(),
                judge_name: vote.judge_id.clone(),
                body: format!(
                    "vote on {} comes from judge id {}, who is not assigned to this festival",
                    vote.entrant_name, vote.judge_id
                ),
                blocking: false,
            });
        }
    }

    AuditReport { findings }
}
