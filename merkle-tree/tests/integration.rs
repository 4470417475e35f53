use airdrop_merkle_tree::{
    verify_claim, AirdropMerkleTree, ClaimLedger, ClaimResult, CsvEntry, MerkleTreeError,
    TreeNode,
};
use anchor_lang::prelude::Pubkey;
use merkle_airdrop::gate::{HolderGate, TokenHolding};
use std::{fs, path::PathBuf, str::FromStr};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/holders.csv")
}

fn temp_artifact(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("airdrop-{}-{}.json", name, std::process::id()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn csv_to_artifact_roundtrip() {
    init_tracing();

    let tree = AirdropMerkleTree::new_from_csv(fixture_path()).unwrap();
    assert_eq!(tree.num_recipients(), 5);
    assert_eq!(tree.total_amount(), 7000);
    tree.verify_proof().unwrap();

    let path = temp_artifact("roundtrip");
    tree.write_to_file(&path).unwrap();
    let loaded = AirdropMerkleTree::new_from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.merkle_root(), tree.merkle_root());
    assert_eq!(loaded.tree_nodes(), tree.tree_nodes());

    // Proofs are answered from the rebuilt tree
    for node in tree.tree_nodes() {
        let proof = loaded.get_proof(&node.recipient).unwrap();
        assert_eq!(proof, tree.get_proof(&node.recipient).unwrap());
        assert!(verify_claim(&tree.merkle_root(), &node.recipient, node.amount, &proof));
    }
}

#[test]
fn tampered_artifact_is_rejected() {
    let tree = AirdropMerkleTree::new_from_csv(fixture_path()).unwrap();
    let path = temp_artifact("tampered");
    tree.write_to_file(&path).unwrap();

    let mut artifact: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    artifact["leaves"][0]["amount"] = serde_json::json!(999_999);
    artifact["total_amount"] = serde_json::json!(7000 - tree.tree_nodes()[0].amount + 999_999);
    fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();

    let result = AirdropMerkleTree::new_from_file(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(MerkleTreeError::RootMismatch { .. })));
}

#[test]
fn row_order_does_not_change_root() {
    let mut entries = CsvEntry::new_from_file(fixture_path()).unwrap();
    let forward = AirdropMerkleTree::new(entries.iter().cloned().map(TreeNode::from).collect())
        .unwrap();
    entries.reverse();
    let reversed =
        AirdropMerkleTree::new(entries.into_iter().map(TreeNode::from).collect()).unwrap();
    assert_eq!(forward.merkle_root(), reversed.merkle_root());
}

#[test]
fn three_recipient_scenario() {
    let a = Pubkey::from_str("C55oyrge1ZmMHRhbtgmwyKK9RKwFsj4nio7yc3xAiSm6").unwrap();
    let b = Pubkey::from_str("EEeUn5VHN8Yh1oBWD2JR1Wxp6ZSbTBMsVeUyhbrgvaiG").unwrap();
    let c = Pubkey::from_str("C5sujMkxhhpivDtkpGcyezkrw2o1dPz5SxFgy5p3ZKsk").unwrap();

    let tree = AirdropMerkleTree::new(vec![
        TreeNode::new(c, 300),
        TreeNode::new(a, 100),
        TreeNode::new(b, 200),
    ])
    .unwrap();
    let root = tree.merkle_root();

    // Deterministic across rebuilds
    let rebuilt = AirdropMerkleTree::new(tree.tree_nodes().to_vec()).unwrap();
    assert_eq!(rebuilt.merkle_root(), root);

    let first = tree.tree_nodes()[0];
    let proof = tree.get_proof_by_index(0).unwrap();
    assert_eq!(proof.len(), 2);
    assert!(verify_claim(&root, &first.recipient, first.amount, &proof));
    assert!(!verify_claim(&root, &first.recipient, first.amount + 1, &proof));

    assert!(matches!(
        tree.get_proof_by_index(3),
        Err(MerkleTreeError::IndexOutOfRange { index: 3, leaf_count: 3 })
    ));
}

#[test]
fn ledger_claims_against_published_root() {
    init_tracing();

    let tree = AirdropMerkleTree::new_from_csv(fixture_path()).unwrap();
    let root = tree.merkle_root();
    let gate_mint = Pubkey::new_unique();
    let ledger = ClaimLedger::new();

    let holder_gate = |owner: Pubkey| {
        HolderGate::new(
            gate_mint,
            TokenHolding {
                mint: gate_mint,
                owner,
                amount: 1,
            },
        )
    };

    for node in tree.tree_nodes() {
        let proof = tree.get_proof(&node.recipient).unwrap();
        let gate = holder_gate(node.recipient);
        assert_eq!(
            ledger.try_claim(&node.recipient, node.amount, &proof, &root, &gate),
            ClaimResult::Authorized(node.amount)
        );
        assert_eq!(
            ledger.try_claim(&node.recipient, node.amount, &proof, &root, &gate),
            ClaimResult::AlreadyClaimed
        );
    }
    assert_eq!(ledger.claimed_count(), tree.tree_nodes().len());

    // Someone outside the list borrowing a listed recipient's proof
    let listed = tree.tree_nodes()[0];
    let outsider = Pubkey::new_unique();
    let proof = tree.get_proof(&listed.recipient).unwrap();
    assert_eq!(
        ledger.try_claim(&outsider, listed.amount, &proof, &root, &holder_gate(outsider)),
        ClaimResult::InvalidProof
    );
    assert!(!ledger.is_claimed(&outsider));
}

#[test]
fn non_holder_is_rejected_with_valid_proof() {
    let tree = AirdropMerkleTree::new_from_csv(fixture_path()).unwrap();
    let node = tree.tree_nodes()[2];
    let proof = tree.get_proof(&node.recipient).unwrap();
    let gate_mint = Pubkey::new_unique();
    let ledger = ClaimLedger::new();

    let no_holding = HolderGate::new(
        gate_mint,
        TokenHolding {
            mint: Pubkey::new_unique(),
            owner: node.recipient,
            amount: 3,
        },
    );
    assert_eq!(
        ledger.try_claim(&node.recipient, node.amount, &proof, &tree.merkle_root(), &no_holding),
        ClaimResult::NotEligible
    );
    assert!(!ledger.is_claimed(&node.recipient));
    assert_eq!(ledger.claimed_count(), 0);
}
