use std::io::Write;

use anyhow::Result;

use crate::constants::{ACCOUNT_LABEL, ACCOUNT_NAME};
use crate::libs::eth::client::BalanceSource;
use crate::libs::eth::units::format_ether;

/// Name to look up plus the label shown next to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account<'a> {
    pub name: &'a str,
    pub label: &'a str,
}

impl Default for Account<'static> {
    fn default() -> Self {
        Self {
            name: ACCOUNT_NAME,
            label: ACCOUNT_LABEL,
        }
    }
}

pub fn balance_line(label: &str, formatted: &str) -> String {
    format!("ETH Balance of {label}: {formatted} ETH")
}

/// Fetch, format, and write a single balance line to `out`.
///
/// Nothing is written unless the lookup succeeds.
pub async fn report<S, W>(source: &S, account: Account<'_>, out: &mut W) -> Result<()>
where
    S: BalanceSource,
    W: Write,
{
    let wei = source.balance_of_name(account.name).await?;
    let line = balance_line(account.label, &format_ether(wei));
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;
    use std::cell::RefCell;

    struct FixedBalance {
        wei: U256,
        asked: RefCell<Vec<String>>,
    }

    impl FixedBalance {
        fn new(wei: U256) -> Self {
            Self {
                wei,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl BalanceSource for FixedBalance {
        async fn balance_of_name(&self, name: &str) -> Result<U256> {
            self.asked.borrow_mut().push(name.to_string());
            Ok(self.wei)
        }
    }

    struct Unreachable;

    impl BalanceSource for Unreachable {
        async fn balance_of_name(&self, name: &str) -> Result<U256> {
            anyhow::bail!("could not reach provider while resolving {name}")
        }
    }

    async fn run(wei: u128) -> String {
        let source = FixedBalance::new(U256::from(wei));
        let mut out = Vec::new();
        report(&source, Account::default(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn zero_balance() {
        assert_eq!(run(0).await, "ETH Balance of vitalik: 0.0 ETH\n");
    }

    #[tokio::test]
    async fn one_ether() {
        assert_eq!(
            run(1_000_000_000_000_000_000).await,
            "ETH Balance of vitalik: 1.0 ETH\n"
        );
    }

    #[tokio::test]
    async fn fractional_balance_is_exact() {
        assert_eq!(
            run(123_456_789_012_345_678).await,
            "ETH Balance of vitalik: 0.123456789012345678 ETH\n"
        );
    }

    #[tokio::test]
    async fn asks_for_the_fixed_name_once() {
        let source = FixedBalance::new(U256::ZERO);
        let mut out = Vec::new();
        report(&source, Account::default(), &mut out).await.unwrap();
        assert_eq!(*source.asked.borrow(), vec!["vitalik.eth".to_string()]);
    }

    #[tokio::test]
    async fn failure_writes_nothing() {
        let mut out = Vec::new();
        let err = report(&Unreachable, Account::default(), &mut out)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("vitalik.eth"));
        assert!(out.is_empty());
    }

    #[test]
    fn line_shape() {
        assert_eq!(balance_line("alice", "2.5"), "ETH Balance of alice: 2.5 ETH");
    }
}
