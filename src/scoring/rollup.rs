// src/scoring/rollup.rs

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::{
    config::FEEDBACK_SCALE,
    models::feedback::{FeedbackAnswer, GroupScore, KeywordScore},
};

/// Feedback scores of one talent inside one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TalentRollup {
    pub talent_id: Uuid,
    pub batch_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub overall_score: f64,
    pub group_scores: Vec<GroupScore>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    earned: i64,
    possible: i64,
}

impl Tally {
    fn add(&mut self, key: i32, max_score: i32) {
        self.earned += i64::from(key);
        self.possible += i64::from(max_score);
    }

    /// `earned / possible` scaled to 0..=10; undefined without any possible points.
    fn score(&self) -> Option<f64> {
        (self.possible > 0).then(|| self.earned as f64 * FEEDBACK_SCALE / self.possible as f64)
    }
}

#[derive(Debug, Default)]
struct GroupTally {
    name: String,
    order: i32,
    tally: Tally,
    /// keyword -> (lowest question order, tally)
    keywords: HashMap<String, (i32, Tally)>,
}

#[derive(Debug, Default)]
struct TalentTally {
    first_name: String,
    last_name: String,
    tally: Tally,
    groups: HashMap<Uuid, GroupTally>,
}

/// Only option-based, live questions with a chosen option count.
fn participates(answer: &FeedbackAnswer) -> Option<i32> {
    if !answer.has_options || answer.deleted {
        return None;
    }
    answer.chosen_key
}

/// Rolls answered feedback questions up into keyword, group and overall scores
/// per (talent, batch).
///
/// Groups without participating answers are left out rather than reported as
/// zero, and a talent with nothing participating has no rollup at all.
pub fn rollup(answers: &[FeedbackAnswer]) -> Vec<TalentRollup> {
    let mut talents: BTreeMap<(Uuid, Uuid), TalentTally> = BTreeMap::new();

    for answer in answers {
        let Some(key) = participates(answer) else {
            continue;
        };

        let talent = talents.entry((answer.talent_id, answer.batch_id)).or_default();
        if talent.first_name.is_empty() && talent.last_name.is_empty() {
            talent.first_name = answer.first_name.clone();
            talent.last_name = answer.last_name.clone();
        }
        talent.tally.add(key, answer.max_score);

        let group = talent.groups.entry(answer.group_id).or_insert_with(|| GroupTally {
            name: answer.group_name.clone(),
            order: answer.group_order,
            ..GroupTally::default()
        });
        group.tally.add(key, answer.max_score);

        let (first_order, keyword) = group
            .keywords
            .entry(answer.keyword.clone())
            .or_insert((answer.question_order, Tally::default()));
        *first_order = (*first_order).min(answer.question_order);
        keyword.add(key, answer.max_score);
    }

    talents
        .into_iter()
        .filter_map(|((talent_id, batch_id), talent)| {
            let overall_score = talent.tally.score()?;
            Some(TalentRollup {
                talent_id,
                batch_id,
                first_name: talent.first_name,
                last_name: talent.last_name,
                overall_score,
                group_scores: group_scores(talent.groups),
            })
        })
        .collect()
}

fn group_scores(groups: HashMap<Uuid, GroupTally>) -> Vec<GroupScore> {
    let mut ordered: Vec<(Uuid, GroupTally)> = groups.into_iter().collect();
    ordered.sort_by(|(a_id, a), (b_id, b)| {
        (a.order, &a.name, a_id).cmp(&(b.order, &b.name, b_id))
    });

    ordered
        .into_iter()
        .filter_map(|(group_id, group)| {
            let score = group.tally.score()?;

            let mut keywords: Vec<(String, i32, Tally)> = group
                .keywords
                .into_iter()
                .map(|(keyword, (order, tally))| (keyword, order, tally))
                .collect();
            keywords.sort_by(|a, b| (a.1, &a.0).cmp(&(b.1, &b.0)));

            Some(GroupScore {
                group_id,
                group_name: group.name,
                score,
                keyword_scores: keywords
                    .into_iter()
                    .filter_map(|(keyword, _, tally)| {
                        tally.score().map(|score| KeywordScore { keyword, score })
                    })
                    .collect(),
            })
        })
        .collect()
}
