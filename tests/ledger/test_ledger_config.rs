#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use fund_ledger::state::LedgerConfig;
    use shared::errors::ErrorCode;

    fn setup_ledger_config() -> (LedgerConfig, Pubkey, Pubkey) {
        let admin = Pubkey::new_unique();
        let settlement_authority = Pubkey::new_unique();

        let mut ledger_config = LedgerConfig::default();
        ledger_config.init(254, admin, settlement_authority);

        (ledger_config, admin, settlement_authority)
    }

    #[test]
    fn test_init() {
        let (ledger_config, admin, settlement_authority) = setup_ledger_config();

        assert_eq!(ledger_config.bump, 254);
        assert_eq!(ledger_config.admin, admin);
        assert_eq!(ledger_config.settlement_authority, settlement_authority);
    }

    #[test]
    fn test_validate_roles() {
        let (ledger_config, admin, settlement_authority) = setup_ledger_config();

        assert!(ledger_config.validate_admin(&admin).is_ok());
        assert!(ledger_config
            .validate_settlement_authority(&settlement_authority)
            .is_ok());

        assert_eq!(
            ledger_config.validate_admin(&settlement_authority).err(),
            Some(ErrorCode::Unauthorized.into())
        );
        assert_eq!(
            ledger_config.validate_settlement_authority(&admin).err(),
            Some(ErrorCode::Unauthorized.into())
        );
    }

    #[test]
    fn test_update_keeps_missing_fields() {
        let (mut ledger_config, admin, _) = setup_ledger_config();
        let new_authority = Pubkey::new_unique();

        ledger_config.update(None, Some(new_authority));

        assert_eq!(ledger_config.admin, admin);
        assert_eq!(ledger_config.settlement_authority, new_authority);

        let new_admin = Pubkey::new_unique();
        ledger_config.update(Some(new_admin), None);

        assert_eq!(ledger_config.admin, new_admin);
        assert_eq!(ledger_config.settlement_authority, new_authority);
        assert_eq!(
            ledger_config.validate_admin(&admin).err(),
            Some(ErrorCode::Unauthorized.into())
        );
    }
}
