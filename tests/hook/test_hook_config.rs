#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use discount_hook::state::HookConfig;
    use discount_hook::utils::Role;
    use shared::errors::ErrorCode;

    struct Roles {
        admin: Pubkey,
        engine: Pubkey,
        coprocessor: Pubkey,
    }

    fn setup_hook_config(executor_program: Pubkey) -> (HookConfig, Roles) {
        let roles = Roles {
            admin: Pubkey::new_unique(),
            engine: Pubkey::new_unique(),
            coprocessor: Pubkey::new_unique(),
        };

        let mut hook_config = HookConfig::default();
        hook_config.init(
            255,
            roles.admin,
            roles.engine,
            roles.coprocessor,
            executor_program,
            300,
            5_000,
        );

        (hook_config, roles)
    }

    #[test]
    fn test_validate_role() {
        let (hook_config, roles) = setup_hook_config(Pubkey::default());

        assert!(hook_config.validate_role(&roles.admin, Role::Admin).is_ok());
        assert!(hook_config.validate_role(&roles.engine, Role::Engine).is_ok());
        assert!(hook_config
            .validate_role(&roles.coprocessor, Role::Coprocessor)
            .is_ok());

        assert_eq!(
            hook_config.validate_role(&roles.admin, Role::Engine).err(),
            Some(ErrorCode::Unauthorized.into())
        );
        assert_eq!(
            hook_config
                .validate_role(&roles.engine, Role::Coprocessor)
                .err(),
            Some(ErrorCode::Unauthorized.into())
        );
        assert_eq!(
            hook_config
                .validate_role(&Pubkey::new_unique(), Role::Admin)
                .err(),
            Some(ErrorCode::Unauthorized.into())
        );
    }

    #[test]
    fn test_update() {
        let (mut hook_config, roles) = setup_hook_config(Pubkey::default());
        let executor = Pubkey::new_unique();

        assert!(!hook_config.has_executor());

        hook_config.update(None, None, None, Some(executor), Some(60), None);

        assert!(hook_config.has_executor());
        assert_eq!(hook_config.executor_program, executor);
        assert_eq!(hook_config.auction_interval, 60);
        assert_eq!(hook_config.admin, roles.admin);
        assert_eq!(hook_config.engine_authority, roles.engine);
        assert_eq!(hook_config.finalizer_reward_lamports, 5_000);

        hook_config.update(None, None, None, Some(Pubkey::default()), None, Some(0));

        assert!(!hook_config.has_executor());
        assert_eq!(hook_config.finalizer_reward_lamports, 0);
    }

    #[test]
    fn test_can_pay_finalizer_reward() {
        let (mut hook_config, _) = setup_hook_config(Pubkey::default());
        let rent_exempt_minimum = 1_000_000;

        assert!(hook_config.can_pay_finalizer_reward(1_005_000, rent_exempt_minimum));
        assert!(hook_config.can_pay_finalizer_reward(2_000_000, rent_exempt_minimum));

        // Would drop below rent exemption
        assert!(!hook_config.can_pay_finalizer_reward(1_004_999, rent_exempt_minimum));
        assert!(!hook_config.can_pay_finalizer_reward(500_000, rent_exempt_minimum));

        hook_config.finalizer_reward_lamports = 0;
        assert!(!hook_config.can_pay_finalizer_reward(2_000_000, rent_exempt_minimum));
    }
}
