// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Records of the events emitted by the System, Indices, Balances, Grandpa, ImOnline, Staking,
//! Session and Offences modules, and [`EventRecords`], a sink with a slot for each of them.

use crate::types::{
    AccountId, AccountIndex, AuthorityId, AuthorityList, Balance, DispatchError, DispatchInfo,
    Phase, SessionIndex, Topics,
};
use crate::{event_record, event_sink};

event_record! {
    /// An extrinsic completed successfully.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSystemExtrinsicSuccess {
        pub phase: Phase,
        pub dispatch_info: DispatchInfo,
        pub topics: Topics,
    }
}

event_record! {
    /// An extrinsic failed.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSystemExtrinsicFailed {
        pub phase: Phase,
        pub dispatch_error: DispatchError,
        pub dispatch_info: DispatchInfo,
        pub topics: Topics,
    }
}

event_record! {
    /// The runtime code was updated.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSystemCodeUpdated {
        pub phase: Phase,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSystemNewAccount {
        pub phase: Phase,
        pub who: AccountId,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSystemKilledAccount {
        pub phase: Phase,
        pub who: AccountId,
        pub topics: Topics,
    }
}

event_record! {
    /// An index was assigned to an account.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventIndicesIndexAssigned {
        pub phase: Phase,
        pub account_id: AccountId,
        pub account_index: AccountIndex,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventIndicesIndexFreed {
        pub phase: Phase,
        pub account_index: AccountIndex,
        pub topics: Topics,
    }
}

event_record! {
    /// An account was created with some free balance.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventBalancesEndowed {
        pub phase: Phase,
        pub who: AccountId,
        pub balance: Balance,
        pub topics: Topics,
    }
}

event_record! {
    /// An account was removed whose balance was non-zero but below the existential deposit.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventBalancesDustLost {
        pub phase: Phase,
        pub who: AccountId,
        pub balance: Balance,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventBalancesTransfer {
        pub phase: Phase,
        pub from: AccountId,
        pub to: AccountId,
        pub value: Balance,
        pub topics: Topics,
    }
}

event_record! {
    /// Free and reserved balance of an account were set by root.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventBalancesBalanceSet {
        pub phase: Phase,
        pub who: AccountId,
        pub free: Balance,
        pub reserved: Balance,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventBalancesDeposit {
        pub phase: Phase,
        pub who: AccountId,
        pub balance: Balance,
        pub topics: Topics,
    }
}

event_record! {
    /// A new GRANDPA authority set was applied.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventGrandpaNewAuthorities {
        pub phase: Phase,
        pub new_authorities: AuthorityList,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventGrandpaPaused {
        pub phase: Phase,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventGrandpaResumed {
        pub phase: Phase,
        pub topics: Topics,
    }
}

event_record! {
    /// A heartbeat was received from an authority.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventImOnlineHeartbeatReceived {
        pub phase: Phase,
        pub authority_id: AuthorityId,
        pub topics: Topics,
    }
}

event_record! {
    /// Staking rewards paid out and the remainder sent to the treasury.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventStakingReward {
        pub phase: Phase,
        pub amount: Balance,
        pub remainder: Balance,
        pub topics: Topics,
    }
}

event_record! {
    /// A validator was slashed by the given amount.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventStakingSlash {
        pub phase: Phase,
        pub validator: AccountId,
        pub amount: Balance,
        pub topics: Topics,
    }
}

event_record! {
    /// An offence report for an old session was discarded.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventStakingOldSlashingReportDiscarded {
        pub phase: Phase,
        pub session_index: SessionIndex,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventSessionNewSession {
        pub phase: Phase,
        pub session_index: SessionIndex,
        pub topics: Topics,
    }
}

event_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct EventOffencesOffence {
        pub phase: Phase,
        pub kind: [u8; 16],
        pub opaque_time_slot: Vec<u8>,
        pub topics: Topics,
    }
}

event_sink! {
    /// Sink with a slot for every record declared in this module.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct EventRecords {
        "System_ExtrinsicSuccess" => pub system_extrinsic_success: EventSystemExtrinsicSuccess,
        "System_ExtrinsicFailed" => pub system_extrinsic_failed: EventSystemExtrinsicFailed,
        "System_CodeUpdated" => pub system_code_updated: EventSystemCodeUpdated,
        "System_NewAccount" => pub system_new_account: EventSystemNewAccount,
        "System_KilledAccount" => pub system_killed_account: EventSystemKilledAccount,
        "Indices_IndexAssigned" => pub indices_index_assigned: EventIndicesIndexAssigned,
        "Indices_IndexFreed" => pub indices_index_freed: EventIndicesIndexFreed,
        "Balances_Endowed" => pub balances_endowed: EventBalancesEndowed,
        "Balances_DustLost" => pub balances_dust_lost: EventBalancesDustLost,
        "Balances_Transfer" => pub balances_transfer: EventBalancesTransfer,
        "Balances_BalanceSet" => pub balances_balance_set: EventBalancesBalanceSet,
        "Balances_Deposit" => pub balances_deposit: EventBalancesDeposit,
        "Grandpa_NewAuthorities" => pub grandpa_new_authorities: EventGrandpaNewAuthorities,
        "Grandpa_Paused" => pub grandpa_paused: EventGrandpaPaused,
        "Grandpa_Resumed" => pub grandpa_resumed: EventGrandpaResumed,
        "ImOnline_HeartbeatReceived" => pub im_online_heartbeat_received: EventImOnlineHeartbeatReceived,
        "Staking_Reward" => pub staking_reward: EventStakingReward,
        "Staking_Slash" => pub staking_slash: EventStakingSlash,
        "Staking_OldSlashingReportDiscarded" => pub staking_old_slashing_report_discarded: EventStakingOldSlashingReportDiscarded,
        "Session_NewSession" => pub session_new_session: EventSessionNewSession,
        "Offences_Offence" => pub offences_offence: EventOffencesOffence,
    }
}
