//! CLI integration tests.
//!
//! These run the actual binary to cover argument parsing, exit codes and
//! output formatting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::*;

/// Creates a test Command for the brdocs binary.
fn brdocs_cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("brdocs")
}

mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        brdocs_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("mask"))
            .stdout(predicate::str::contains("validate"))
            .stdout(predicate::str::contains("scan"));
    }

    #[test]
    fn test_missing_subcommand() {
        brdocs_cmd().assert().failure();
    }

    #[test]
    fn test_validate_requires_values() {
        brdocs_cmd()
            .arg("validate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }
}

mod mask_command {
    use super::*;

    #[test]
    fn test_mask_auto() {
        brdocs_cmd()
            .args(["mask", "cpf-cnpj-auto", "123456789012"])
            .assert()
            .success()
            .stdout("12.345.678/9012\n");
    }

    #[test]
    fn test_mask_phone() {
        brdocs_cmd()
            .args(["mask", "phone-mobile", "11987654321"])
            .assert()
            .success()
            .stdout("(11) 98765-4321\n");
    }

    #[test]
    fn test_unknown_pattern() {
        brdocs_cmd()
            .args(["mask", "cep", "01310100"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown mask pattern 'cep'"));
    }

    #[test]
    fn test_unformat() {
        brdocs_cmd()
            .args(["unformat", "11.222.333/0001-81"])
            .assert()
            .success()
            .stdout("11222333000181\n");
    }
}

mod validate_command {
    use super::*;

    #[test]
    fn test_all_valid() {
        brdocs_cmd()
            .arg("validate")
            .args(VALID_CPFS_FORMATTED)
            .args(VALID_CNPJS)
            .assert()
            .success()
            .stdout(predicate::str::contains("valid (CPF 111.444.777-35)"))
            .stdout(predicate::str::contains("valid (CNPJ 11.222.333/0001-81)"));
    }

    #[test]
    fn test_invalid_value_fails() {
        brdocs_cmd()
            .args(["validate", "11144477735", "12345678909"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("12345678909: invalid (denylisted)"))
            .stderr(predicate::str::contains("1 of 2 value(s) invalid"));
    }

    #[test]
    fn test_kind_cnpj_rejects_cpf() {
        brdocs_cmd()
            .args(["validate", "--kind", "cnpj", "11144477735"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("invalid (too short)"));
    }

    #[test]
    fn test_phone_kind() {
        brdocs_cmd()
            .args(["validate", "--kind", "phone", "119876"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("incomplete phone"));
    }

    #[test]
    fn test_json_output() {
        let output = brdocs_cmd()
            .args(["validate", "--json", "11222333000181"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(reports[0]["valid"], true);
        assert_eq!(reports[0]["formatted"], "CNPJ 11.222.333/0001-81");
    }
}

mod scan_command {
    use super::*;

    #[test]
    fn test_scan_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("clientes.txt");
        fs::write(
            &input,
            "Cliente: ACME LTDA - CNPJ 11.222.333/0001-81\nSócio: CPF 111.444.777-36\n",
        )
        .unwrap();

        brdocs_cmd()
            .args(["scan", "--input"])
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("CNPJ\t11.222.333/0001-81\tvalid"))
            .stdout(predicate::str::contains("CPF\t111.444.777-36\tinvalid (bad checksum)"));
    }

    #[test]
    fn test_scan_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("notes.txt");
        fs::write(&input, "CPF 529.982.247-25").unwrap();

        let output = brdocs_cmd()
            .args(["scan", "--json", "--input"])
            .arg(&input)
            .output()
            .unwrap();
        let findings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(findings[0]["kind"], "cpf");
        assert_eq!(findings[0]["rejection"], serde_json::Value::Null);
    }

    #[test]
    fn test_scan_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        brdocs_cmd()
            .args(["scan", "--input"])
            .arg(temp_dir.path().join("missing.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }
}

mod total_command {
    use super::*;

    #[test]
    fn test_total() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("itens.json");
        fs::write(
            &input,
            r#"[
                {"quantidade": 2, "valor_unitario": 50.0, "desconto": 10},
                {"quantity": 1, "unit_price": 25.5}
            ]"#,
        )
        .unwrap();

        brdocs_cmd()
            .args(["total", "--input"])
            .arg(&input)
            .assert()
            .success()
            .stdout("115.50\n");
    }

    #[test]
    fn test_total_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("itens.json");
        fs::write(&input, "[{").unwrap();

        brdocs_cmd()
            .args(["total", "--input"])
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load quote items"));
    }
}
