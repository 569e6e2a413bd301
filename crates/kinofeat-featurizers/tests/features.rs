use anyhow::Result;
use kinofeat_core::{
    load_structure, AtomCollection, ChainSelector, ChainStrategy, ChainTopology, KinofeatError,
    LengthUnit, Numbering, Trajectory,
};
use kinofeat_featurizers::{
    compute_conformational_features, compute_interaction_features, featurize, AngleUnit,
    Diagnostic, Dihedral, Distance, FeatureKind, FeatureRequest, FeaturizeConfig, LogSink,
    MissingAtom,
};
use kinofeat_test_data::{numbering_02, TestFile, NUMBERING_01};
use std::cell::RefCell;

const TOLERANCE: f64 = 1e-3;

fn load(file: TestFile) -> Result<(AtomCollection, Trajectory)> {
    let (path, _temp) = file.create_temp()?;
    Ok(load_structure(&path)?)
}

fn chain_a(collection: &AtomCollection) -> Result<ChainTopology<'_>> {
    Ok(ChainTopology::new(
        collection,
        &ChainSelector::Id('A'),
        ChainStrategy::FirstAppearance,
    )?)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

const DIHEDRALS_01: [f64; 10] = [
    -61.295740, 148.288793, 164.764040, 148.404975, 164.577380, 118.333240, -163.615788,
    148.311798, 164.683815, 118.301070,
];
const DISTANCES_01: [f64; 5] = [33.027028, 34.450632, 140.015892, 171.957200, 89.999604];

#[test]
fn test_conformation_complete_pocket() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_01())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let features = compute_conformational_features(
        &topology,
        &trajectory,
        &numbering,
        &FeaturizeConfig::default(),
        &LogSink,
    )?;

    assert_eq!(
        features.key_residues.as_array(),
        &[767, 775, 836, 838, 753, 770, 774, 864, 862, 863, 873, 814]
    );
    assert_eq!(features.dihedrals.dim(), (1, 10));
    assert_eq!(features.distances.dim(), (1, 5));
    assert!(features.diagnostics.is_empty());
    for (value, expected) in features.dihedrals.row(0).iter().zip(DIHEDRALS_01) {
        assert_close(*value, expected);
    }
    for (value, expected) in features.distances.row(0).iter().zip(DISTANCES_01) {
        assert_close(*value, expected);
    }
    assert_close(features.distance(Distance::Fret).unwrap()[0], 89.999604);
    Ok(())
}

#[test]
fn test_conformation_missing_fret_residue() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_02())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(numbering_02())?;

    let reported = RefCell::new(Vec::new());
    let sink = |d: &Diagnostic| reported.borrow_mut().push(d.clone());
    let features = compute_conformational_features(
        &topology,
        &trajectory,
        &numbering,
        &FeaturizeConfig::default(),
        &sink,
    )?;

    assert_eq!(features.key_residues.as_array()[10], 873);
    assert_eq!(features.dihedrals.dim(), (1, 10));
    assert_eq!(features.distances.dim(), (1, 4));
    assert_eq!(
        features.distance_names,
        [
            Distance::SaltBridge1,
            Distance::SaltBridge2,
            Distance::DfgPlacement1,
            Distance::DfgPlacement2
        ]
    );
    assert!(features.distance(Distance::Fret).is_none());
    for (value, expected) in features.dihedrals.row(0).iter().zip(DIHEDRALS_01) {
        assert_close(*value, expected);
    }
    for (value, expected) in features.distances.row(0).iter().zip(DISTANCES_01) {
        assert_close(*value, expected);
    }

    let expected = Diagnostic::MissingAtoms {
        group: "fret".to_string(),
        atoms: vec![MissingAtom {
            residue: Some(873),
            atom_name: "CA".to_string(),
        }],
    };
    assert_eq!(features.diagnostics.iter().collect::<Vec<_>>(), vec![&expected]);
    assert_eq!(reported.into_inner(), vec![expected]);
    Ok(())
}

#[test]
fn test_conformation_radians_and_idempotence() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_01())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let config = FeaturizeConfig::builder()
        .angle_unit(AngleUnit::Radians)
        .build();

    let first = compute_conformational_features(&topology, &trajectory, &numbering, &config, &LogSink)?;
    let second = compute_conformational_features(&topology, &trajectory, &numbering, &config, &LogSink)?;
    assert_eq!(first, second);
    assert_close(first.dihedral(Dihedral::AlphaCRotation).unwrap()[0], -1.069812);
    Ok(())
}

#[test]
fn test_trajectory_frames() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_traj())?;
    assert_eq!(trajectory.n_frames(), 3);
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let config = FeaturizeConfig::default();

    let conformation =
        compute_conformational_features(&topology, &trajectory, &numbering, &config, &LogSink)?;
    assert_eq!(conformation.dihedrals.dim(), (3, 10));
    for row in conformation.dihedrals.rows() {
        for (value, expected) in row.iter().zip(DIHEDRALS_01) {
            assert_close(*value, expected);
        }
    }
    for row in conformation.distances.rows() {
        for (value, expected) in row.iter().zip(DISTANCES_01) {
            assert_close(*value, expected);
        }
    }

    let interaction =
        compute_interaction_features(&topology, &trajectory, "03Q", &numbering, &config, &LogSink)?;
    assert_eq!(interaction.mean_distance.len(), 3);
    for mean in &interaction.mean_distance {
        assert_close(*mean, 55.596598);
    }

    let nanometer = trajectory.to_unit(LengthUnit::Nanometer);
    let interaction =
        compute_interaction_features(&topology, &nanometer, "03Q", &numbering, &config, &LogSink)?;
    assert_close(interaction.mean_distance[0], 5.5596598);
    Ok(())
}

#[test]
fn test_interaction_complete_pocket() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_01())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let features = compute_interaction_features(
        &topology,
        &trajectory,
        "03Q",
        &numbering,
        &FeaturizeConfig::default(),
        &LogSink,
    )?;
    assert_eq!(features.pair_count, 6 * 85);
    assert_eq!(features.mean_distance.len(), 1);
    assert_close(features.mean_distance[0], 55.596598);
    assert!(features.diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_interaction_ligand_after_second_chain() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_03())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let features = compute_interaction_features(
        &topology,
        &trajectory,
        "03Q",
        &numbering,
        &FeaturizeConfig::default(),
        &LogSink,
    )?;
    assert_eq!(features.pair_count, 6 * 85);
    assert_close(features.mean_distance[0], 55.596598);
    Ok(())
}

#[test]
fn test_interaction_pocket_gap() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_02())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(numbering_02())?;
    let features = compute_interaction_features(
        &topology,
        &trajectory,
        "03Q",
        &numbering,
        &FeaturizeConfig::default(),
        &LogSink,
    )?;
    assert_eq!(features.pair_count, 504);
    assert_close(features.mean_distance[0], 54.950919);
    assert_eq!(
        features.diagnostics.iter().collect::<Vec<_>>(),
        vec![&Diagnostic::PocketGap {
            position: 84,
            pairs_dropped: 6
        }]
    );
    Ok(())
}

#[test]
fn test_interaction_errors() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_01())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let config = FeaturizeConfig::default();

    for ligand in ["apo", "", "STI"] {
        let err = compute_interaction_features(&topology, &trajectory, ligand, &numbering, &config, &LogSink)
            .unwrap_err();
        assert!(matches!(err, KinofeatError::UnresolvableLigand { .. }));
    }

    let gaps = Numbering::new(vec![0; 85])?;
    assert_eq!(
        compute_interaction_features(&topology, &trajectory, "03Q", &gaps, &config, &LogSink)
            .unwrap_err(),
        KinofeatError::NoResolvedPocketAtoms
    );

    // with 'C' as the marker only N1, O1, H1 and H2 are kept
    let config = FeaturizeConfig::builder().hydrogen_marker('C').build();
    let features =
        compute_interaction_features(&topology, &trajectory, "03Q", &numbering, &config, &LogSink)?;
    assert_eq!(features.pair_count, 4 * 85);
    let config = FeaturizeConfig::builder().ligand_atom_capacity(4).build();
    let features =
        compute_interaction_features(&topology, &trajectory, "03Q", &numbering, &config, &LogSink)?;
    assert_eq!(
        features.diagnostics.iter().next(),
        Some(&Diagnostic::LigandCapacity {
            atoms: 6,
            capacity: 4
        })
    );

    // the capacity only sizes the pair buffer; a huge value read from JSON is harmless
    let config = FeaturizeConfig::from_json(r#"{"ligand_atom_capacity": 18446744073709551615}"#)?;
    assert_eq!(config.ligand_atom_capacity, usize::MAX);
    let features =
        compute_interaction_features(&topology, &trajectory, "03Q", &numbering, &config, &LogSink)?;
    assert_eq!(features.pair_count, 6 * 85);
    assert!(features.diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_empty_trajectory() -> Result<()> {
    let (collection, _) = load(TestFile::kinase_01())?;
    let trajectory = Trajectory::empty(collection.get_size(), LengthUnit::Angstrom);
    let request = FeatureRequest::builder()
        .chain(ChainSelector::Id('A'))
        .numbering(Numbering::new(NUMBERING_01.to_vec())?)
        .ligand("03Q")
        .build();
    let features = featurize(&request, &collection, &trajectory, &FeaturizeConfig::default(), &LogSink)?;

    let conformation = features.conformation.unwrap();
    assert_eq!(conformation.dihedrals.dim(), (0, 10));
    assert_eq!(conformation.distances.dim(), (0, 5));
    let interaction = features.interaction.unwrap();
    assert!(interaction.mean_distance.is_empty());
    assert_eq!(interaction.pair_count, 510);
    Ok(())
}

#[test]
fn test_featurize_dispatch() -> Result<()> {
    let (collection, trajectory) = load(TestFile::kinase_01())?;
    let config = FeaturizeConfig::default();
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;

    let request = FeatureRequest::builder()
        .kind("conf".parse::<FeatureKind>()?)
        .chain("A".parse()?)
        .numbering(numbering.clone())
        .build();
    let features = featurize(&request, &collection, &trajectory, &config, &LogSink)?;
    assert!(features.interaction.is_none());
    assert_eq!(features.conformation.unwrap().distances.dim(), (1, 5));

    let request = FeatureRequest::builder()
        .kind(FeatureKind::Both)
        .chain(ChainSelector::Id('A'))
        .numbering(numbering.clone())
        .ligand("03Q")
        .build();
    let features = featurize(&request, &collection, &trajectory, &config, &LogSink)?;
    assert_close(features.interaction.as_ref().unwrap().mean_distance[0], 55.596598);
    let json = serde_json::to_value(&features)?;
    assert_eq!(json["conformation"]["dihedral_names"][0], "aC_rot");
    assert_eq!(json["conformation"]["key_residues"][10], 873);
    assert_eq!(json["interaction"]["pair_count"], 510);

    // apo fails the whole request, conformation included
    let request = FeatureRequest::builder()
        .kind(FeatureKind::Both)
        .chain(ChainSelector::Id('A'))
        .numbering(numbering.clone())
        .ligand("apo")
        .build();
    assert!(matches!(
        featurize(&request, &collection, &trajectory, &config, &LogSink),
        Err(KinofeatError::UnresolvableLigand { .. })
    ));

    let request = FeatureRequest::builder()
        .kind(FeatureKind::Conformation)
        .chain(ChainSelector::Id('C'))
        .numbering(numbering)
        .build();
    assert!(matches!(
        featurize(&request, &collection, &trajectory, &config, &LogSink),
        Err(KinofeatError::UnknownChain { .. })
    ));
    Ok(())
}

#[test]
fn test_frame_mismatch() -> Result<()> {
    let (collection, _) = load(TestFile::kinase_01())?;
    let (_, trajectory) = load(TestFile::kinase_02())?;
    let topology = chain_a(&collection)?;
    let numbering = Numbering::new(NUMBERING_01.to_vec())?;
    let err = compute_conformational_features(
        &topology,
        &trajectory,
        &numbering,
        &FeaturizeConfig::default(),
        &LogSink,
    )
    .unwrap_err();
    assert_eq!(
        err,
        KinofeatError::FrameMismatch {
            expected: 844,
            found: 839
        }
    );
    Ok(())
}
