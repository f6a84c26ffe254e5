//! Five phases (wu xing) and the body/use relation between trigrams.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FivePhase {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl FivePhase {
    /// Phase produced by this one (Metal -> Water -> Wood -> Fire -> Earth -> Metal).
    pub fn generates(self) -> Self {
        match self {
            FivePhase::Metal => FivePhase::Water,
            FivePhase::Water => FivePhase::Wood,
            FivePhase::Wood => FivePhase::Fire,
            FivePhase::Fire => FivePhase::Earth,
            FivePhase::Earth => FivePhase::Metal,
        }
    }

    /// Phase restrained by this one (Metal -> Wood -> Earth -> Water -> Fire -> Metal).
    pub fn overcomes(self) -> Self {
        match self {
            FivePhase::Metal => FivePhase::Wood,
            FivePhase::Wood => FivePhase::Earth,
            FivePhase::Earth => FivePhase::Water,
            FivePhase::Water => FivePhase::Fire,
            FivePhase::Fire => FivePhase::Metal,
        }
    }
}

impl fmt::Display for FivePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FivePhase::Metal => "Metal",
            FivePhase::Wood => "Wood",
            FivePhase::Water => "Water",
            FivePhase::Fire => "Fire",
            FivePhase::Earth => "Earth",
        };
        f.write_str(name)
    }
}

/// How the use (yong) trigram's phase acts on the body (ti) trigram's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    Same,
    UseGeneratesBody,
    BodyGeneratesUse,
    UseOvercomesBody,
    BodyOvercomesUse,
}

impl Relation {
    pub fn between(body: FivePhase, yong: FivePhase) -> Self {
        if body == yong {
            Relation::Same
        } else if yong.generates() == body {
            Relation::UseGeneratesBody
        } else if body.generates() == yong {
            Relation::BodyGeneratesUse
        } else if yong.overcomes() == body {
            Relation::UseOvercomesBody
        } else {
            Relation::BodyOvercomesUse
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Relation::Same => "body and use share a phase",
            Relation::UseGeneratesBody => "use generates body",
            Relation::BodyGeneratesUse => "body generates use",
            Relation::UseOvercomesBody => "use overcomes body",
            Relation::BodyOvercomesUse => "body overcomes use",
        };
        f.write_str(text)
    }
}
