use taskdesk_shared::{
    SnapshotStore, USERS_KEY,
    task::TaskPayload,
    user::{Address, Company, StoredUser, UserPayload},
};

#[allow(dead_code)]
pub fn valid_user() -> UserPayload {
    UserPayload {
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        phone: "123-456-7890".to_owned(),
        website: Some("example.com".to_owned()),
        address: Some(Address {
            street: "123 Main St".to_owned(),
            suite: "Apt 4".to_owned(),
            city: "New York".to_owned(),
        }),
        company: Some(Company {
            name: "Acme Corp".to_owned(),
            catch_phrase: Some("Innovation at its best".to_owned()),
            bs: None,
        }),
    }
}

#[allow(dead_code)]
pub fn valid_task() -> TaskPayload {
    TaskPayload {
        title: "Write report".to_owned(),
        description: Some("Quarterly numbers".to_owned()),
        completed: false,
        user_id: 1,
    }
}

#[allow(dead_code)]
pub fn seed_users(store: &SnapshotStore, emails: &[&str]) -> anyhow::Result<()> {
    let users = emails
        .iter()
        .enumerate()
        .map(|(i, email)| StoredUser {
            id: i as u64 + 1,
            payload: UserPayload {
                email: (*email).to_owned(),
                ..valid_user()
            },
            password_hash: None,
        })
        .collect::<Vec<_>>();

    store.write(USERS_KEY, &users)?;

    Ok(())
}
