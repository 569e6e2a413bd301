//! One entry point for both extractors.
use crate::config::FeaturizeConfig;
use crate::conformation::{compute_conformational_features, ConformationFeatures};
use crate::diagnostics::DiagnosticSink;
use crate::interaction::{compute_interaction_features, is_apo, InteractionFeatures};
use bon::Builder;
use kinofeat_core::{
    AtomCollection, ChainSelector, ChainTopology, KinofeatError, Numbering, Result, Trajectory,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum FeatureKind {
    #[strum(serialize = "conf")]
    #[serde(rename = "conf")]
    Conformation,
    #[strum(serialize = "interact")]
    #[serde(rename = "interact")]
    Interaction,
    #[default]
    #[strum(serialize = "both")]
    #[serde(rename = "both")]
    Both,
}

impl FeatureKind {
    pub fn includes_conformation(&self) -> bool {
        matches!(self, FeatureKind::Conformation | FeatureKind::Both)
    }

    pub fn includes_interaction(&self) -> bool {
        matches!(self, FeatureKind::Interaction | FeatureKind::Both)
    }
}

/// What to compute for one structure.
#[derive(Builder, Clone, Debug)]
pub struct FeatureRequest {
    #[builder(default)]
    pub kind: FeatureKind,
    pub chain: ChainSelector,
    pub numbering: Numbering,
    /// Residue name of the bound ligand; `None` or `"apo"` for an apo structure.
    #[builder(into)]
    pub ligand: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeatureSet {
    pub conformation: Option<ConformationFeatures>,
    pub interaction: Option<InteractionFeatures>,
}

/// Run the extractors named by `request.kind` over `trajectory`.
///
/// The chain is resolved once and shared by both extractors. A request that
/// needs interaction features for an apo structure fails as a whole.
pub fn featurize(
    request: &FeatureRequest,
    collection: &AtomCollection,
    trajectory: &Trajectory,
    config: &FeaturizeConfig,
    sink: &dyn DiagnosticSink,
) -> Result<FeatureSet> {
    let ligand = request.ligand.as_deref().unwrap_or_default();
    if request.kind.includes_interaction() && is_apo(ligand) {
        return Err(KinofeatError::unresolvable_ligand(ligand));
    }

    let topology = ChainTopology::new(collection, &request.chain, config.chain_strategy)?;
    let conformation = if request.kind.includes_conformation() {
        Some(compute_conformational_features(
            &topology,
            trajectory,
            &request.numbering,
            config,
            sink,
        )?)
    } else {
        None
    };
    let interaction = if request.kind.includes_interaction() {
        Some(compute_interaction_features(
            &topology,
            trajectory,
            ligand,
            &request.numbering,
            config,
            sink,
        )?)
    } else {
        None
    };

    Ok(FeatureSet {
        conformation,
        interaction,
    })
}
