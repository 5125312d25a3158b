//! End-to-end scenarios from spec §8, run against `MemoryBackend`.

use kvrecord::prelude::*;

impl_scalar_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    struct UserRecord {
        user_id: u64,
        email: CharPtr,
        username: CharPtr,
        age: u32,
        balance: u64,
    }
}

impl_scalar_record! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct UserPk {
        user_id: u64,
    }
}

impl KeyOf<UserRecord> for UserPk {
    const NAME: &'static str = "pk";

    fn extract(record: &UserRecord) -> Self {
        Self {
            user_id: record.user_id,
        }
    }
}

impl_scalar_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    struct UserByEmail {
        email: CharPtr,
    }
}

impl KeyOf<UserRecord> for UserByEmail {
    const NAME: &'static str = "by_email";

    fn extract(record: &UserRecord) -> Self {
        Self {
            email: record.email.clone(),
        }
    }
}

impl Indexed for UserRecord {
    type Pk = UserPk;

    const TABLE: &'static str = "user_record";
    const SECONDARY_NAMES: &'static [&'static str] = &["by_email"];

    fn secondary_keys(&self) -> Vec<(&'static str, Vec<u8>)> {
        vec![(
            UserByEmail::NAME,
            encode_to_vec(&UserByEmail::extract(self)),
        )]
    }
}

impl_scalar_record! {
    #[derive(Clone, Debug, Eq, PartialEq)]
    struct MailboxMessage {
        mailbox_id: u32,
        uid: u32,
        received: Timespec,
        subject: CharPtr,
    }
}

impl_scalar_record! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct MailboxMessagePk {
        mailbox_id: u32,
        uid: u32,
    }
}

impl KeyOf<MailboxMessage> for MailboxMessagePk {
    const NAME: &'static str = "pk";

    fn extract(record: &MailboxMessage) -> Self {
        Self {
            mailbox_id: record.mailbox_id,
            uid: record.uid,
        }
    }
}

impl_scalar_record! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct MailboxMessageByTime {
        mailbox_id: u32,
        received: Timespec,
    }
}

impl KeyOf<MailboxMessage> for MailboxMessageByTime {
    const NAME: &'static str = "by_mailbox_time";

    fn extract(record: &MailboxMessage) -> Self {
        Self {
            mailbox_id: record.mailbox_id,
            received: record.received,
        }
    }
}

impl Indexed for MailboxMessage {
    type Pk = MailboxMessagePk;

    const TABLE: &'static str = "mailbox_message";
    const SECONDARY_NAMES: &'static [&'static str] = &["by_mailbox_time"];

    fn secondary_keys(&self) -> Vec<(&'static str, Vec<u8>)> {
        vec![(
            MailboxMessageByTime::NAME,
            encode_to_vec(&MailboxMessageByTime::extract(self)),
        )]
    }
}

/// Scenario 1 — user insert + PK lookup.
#[test]
fn scenario_1_user_insert_and_pk_lookup() {
    let backend = MemoryBackend::open("scenario1");
    let mut txn = backend.begin(false).unwrap();

    let record = UserRecord {
        user_id: 1002,
        email: "bob@example.com".into(),
        username: "bob".into(),
        age: 25,
        balance: 50_000,
    };
    put(&mut txn, &record, None).unwrap();

    let (fetched, _) = get::<UserRecord, _>(&txn, &UserPk { user_id: 1002 }, false).unwrap();
    assert_eq!(encode_to_vec(&fetched), encode_to_vec(&record));
}

/// Scenario 2 — secondary lookup.
#[test]
fn scenario_2_secondary_lookup() {
    let backend = MemoryBackend::open("scenario2");
    let mut txn = backend.begin(false).unwrap();

    let record = UserRecord {
        user_id: 1002,
        email: "bob@example.com".into(),
        username: "bob".into(),
        age: 25,
        balance: 50_000,
    };
    put(&mut txn, &record, None).unwrap();

    let pk = lookup_by::<UserRecord, _, _>(
        &txn,
        &UserByEmail {
            email: "bob@example.com".into(),
        },
    )
    .unwrap();
    assert_eq!(pk, UserPk { user_id: 1002 });
}

/// Scenario 3 — email change updates the secondary index.
#[test]
fn scenario_3_email_change() {
    let backend = MemoryBackend::open("scenario3");
    let mut txn = backend.begin(false).unwrap();

    let record = UserRecord {
        user_id: 1002,
        email: "bob@example.com".into(),
        username: "bob".into(),
        age: 25,
        balance: 50_000,
    };
    put(&mut txn, &record, None).unwrap();

    let (fetched, snapshot) = get::<UserRecord, _>(&txn, &UserPk { user_id: 1002 }, true).unwrap();
    let mut updated = fetched;
    updated.email = "bob_new@example.com".into();
    put(&mut txn, &updated, snapshot.as_ref()).unwrap();

    let old = lookup_by::<UserRecord, _, _>(
        &txn,
        &UserByEmail {
            email: "bob@example.com".into(),
        },
    );
    assert!(old.unwrap_err().is_not_found());

    let new = lookup_by::<UserRecord, _, _>(
        &txn,
        &UserByEmail {
            email: "bob_new@example.com".into(),
        },
    )
    .unwrap();
    assert_eq!(new, UserPk { user_id: 1002 });
}

/// Scenario 4 — time-ordered range over a secondary index.
#[test]
fn scenario_4_time_ordered_range() {
    let backend = MemoryBackend::open("scenario4");
    let mut txn = backend.begin(false).unwrap();

    for (uid, sec) in [
        (1u32, 1_700_001_000i64),
        (2, 1_700_001_100),
        (3, 1_700_001_200),
        (4, 1_700_001_300),
    ] {
        let message = MailboxMessage {
            mailbox_id: 2,
            uid,
            received: Timespec::new(sec, 0),
            subject: "hi".into(),
        };
        put(&mut txn, &message, None).unwrap();
    }

    let start = MailboxMessageByTime {
        mailbox_id: 2,
        received: Timespec::new(0, 0),
    };
    let mut cursor = cursor_by::<MailboxMessage, _, _>(&txn, Some(&start)).unwrap();

    let mut seen = Vec::new();
    loop {
        let Some((key, _)) = cursor.current() else {
            break;
        };
        let (key, _) = <MailboxMessageByTime as Codec>::decode(key).unwrap();
        seen.push(key);
        if cursor.advance().is_err() {
            break;
        }
    }

    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|k| k.mailbox_id == 2));
    assert!(seen.windows(2).all(|w| w[0].received.sec <= w[1].received.sec));
}

/// Scenario 5 — composite primary key round-trip.
#[test]
fn scenario_5_composite_pk_roundtrip() {
    let backend = MemoryBackend::open("scenario5");
    let mut txn = backend.begin(false).unwrap();

    let message = MailboxMessage {
        mailbox_id: 2,
        uid: 203,
        received: Timespec::new(1_700_001_000, 0),
        subject: "hi".into(),
    };
    put(&mut txn, &message, None).unwrap();

    let (fetched, _) = get::<MailboxMessage, _>(
        &txn,
        &MailboxMessagePk {
            mailbox_id: 2,
            uid: 203,
        },
        false,
    )
    .unwrap();
    assert_eq!(encode_to_vec(&fetched), encode_to_vec(&message));

    let missing = get::<MailboxMessage, _>(
        &txn,
        &MailboxMessagePk {
            mailbox_id: 2,
            uid: 204,
        },
        false,
    );
    assert!(missing.unwrap_err().is_not_found());
}

/// Scenario 6 — signed int sort order.
#[test]
fn scenario_6_signed_int_sort_order() {
    let values: [i32; 5] = [-2, -1, 0, 1, 2];
    let mut pairs: Vec<(i32, Vec<u8>)> =
        values.iter().map(|&v| (v, encode_to_vec(&v))).collect();
    pairs.sort_by(|a, b| a.1.cmp(&b.1));
    let sorted: Vec<i32> = pairs.into_iter().map(|(v, _)| v).collect();
    assert_eq!(sorted, values.to_vec());
}

/// Scenario 7 — timespec sort order.
#[test]
fn scenario_7_timespec_sort_order() {
    let chronological = [
        Timespec::new(-1, 0),
        Timespec::new(0, 0),
        Timespec::new(0, 500_000_000),
        Timespec::new(1, 0),
    ];
    let mut pairs: Vec<(Timespec, Vec<u8>)> = chronological
        .iter()
        .map(|&t| (t, encode_to_vec(&t)))
        .collect();
    pairs.sort_by(|a, b| a.1.cmp(&b.1));
    let sorted: Vec<Timespec> = pairs.into_iter().map(|(t, _)| t).collect();
    assert_eq!(sorted, chronological.to_vec());
}

/// The in-memory backend's `abort` is a documented no-op (spec §9).
#[test]
fn memory_backend_abort_is_a_no_op() {
    let backend = MemoryBackend::open("abort");
    let mut txn = backend.begin(false).unwrap();
    let record = UserRecord {
        user_id: 1,
        email: "x@example.com".into(),
        username: "x".into(),
        age: 1,
        balance: 0,
    };
    put(&mut txn, &record, None).unwrap();
    txn.abort().unwrap();

    let txn2 = backend.begin(true).unwrap();
    let (fetched, _) = get::<UserRecord, _>(&txn2, &UserPk { user_id: 1 }, false).unwrap();
    assert_eq!(encode_to_vec(&fetched), encode_to_vec(&record));
}
