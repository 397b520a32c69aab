use serde_json::json;
use social_graph::lifecycle::setup_tracing;
use social_graph::model::{Action, FeedImage, Story, TemplatizedAction};
use social_graph::params;
use social_graph::session::mock::MockSession;
use social_graph::session::{Method, SessionError};
use social_graph::user::{Field, User, UserError};

fn user_with_mock(id: u64) -> (User, MockSession) {
    setup_tracing();
    let mock = MockSession::new();
    let user = User::new(id, mock.session()).expect("valid id");
    (user, mock)
}

/// Friends are fetched once; the second read is served from memory.
#[tokio::test]
async fn test_friends_fetched_once() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!(["10", 11, "12"]));

    let first: Vec<_> = user.friends().await.unwrap().iter().map(User::id).collect();
    assert_eq!(first, vec![Some(10), Some(11), Some(12)]);

    let friends = user.friends().await.unwrap();
    assert_eq!(friends.len(), 3);
    assert!(friends.iter().all(|friend| !friend.is_populated()));
    assert!(friends.iter().all(|friend| friend.session().is_some()));

    assert_eq!(mock.call_count(Method::FriendsGet), 1);
    mock.verify();
}

/// Seeding after a fetch is ignored.
#[tokio::test]
async fn test_set_friends_after_fetch_is_ignored() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2]));

    user.friends().await.unwrap();
    user.set_friends(vec![User::new(99u64, mock.session()).unwrap()]);

    let ids: Vec<_> = user.friends().await.unwrap().iter().map(User::id).collect();
    assert_eq!(ids, vec![Some(2)]);
    mock.verify();
}

#[tokio::test]
async fn test_is_friends_with() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2, 3]));

    let other = User::new("3", mock.session()).unwrap();
    assert!(user.is_friends_with(&other).await.unwrap());
    assert!(user.is_friends_with("2").await.unwrap());
    assert!(!user.is_friends_with(&4u64).await.unwrap());

    let err = user.is_friends_with("three").await.unwrap_err();
    assert_eq!(err, UserError::InvalidId("three".into()));

    assert_eq!(mock.call_count(Method::FriendsGet), 1);
    mock.verify();
}

/// Friends with info: one id call, one batched info call with the requested fields.
#[tokio::test]
async fn test_friends_with_info_batches_and_caches() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2, 3]));
    mock.expect(Method::UsersGetInfo).return_ok(json!([
        { "uid": 2, "name": "Bea", "last_name": "Smith" },
        { "uid": "3", "name": "Cal", "current_location": { "city": "Reno" } }
    ]));

    let friends = user
        .friends_with_info(&[Field::LastName, Field::Name, Field::CurrentLocation])
        .await
        .unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends[0].id(), Some(2));
    assert_eq!(friends[0].raw(Field::LastName), Some(&json!("Smith")));
    assert_eq!(friends[1].id(), Some(3));
    assert_eq!(
        friends[1].current_location().unwrap().city.as_deref(),
        Some("Reno")
    );
    assert!(friends.iter().all(User::is_populated));

    let calls = mock.calls();
    assert_eq!(calls[1].params["fields"], "name,last_name,current_location");
    assert_eq!(calls[1].params["uids"], "2,3");

    // Cached regardless of which fields are asked for next.
    let again = user.friends_with_info(&[Field::Pic]).await.unwrap();
    assert_eq!(again.len(), 2);
    assert_eq!(mock.calls().len(), 2);
    mock.verify();
}

/// A record without a uid still becomes a friend, with no id but the session attached.
#[tokio::test]
async fn test_friends_with_info_keeps_record_without_uid() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2, 3]));
    mock.expect(Method::UsersGetInfo).return_ok(json!([
        { "uid": 2, "name": "Bea" },
        { "name": "Cal" }
    ]));

    let friends = user.friends_with_info(&[Field::Name]).await.unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends[0].id(), Some(2));
    assert_eq!(friends[1].id(), None);
    assert_eq!(friends[1].raw(Field::Name), Some(&json!("Cal")));
    assert!(friends[1].is_populated());
    assert!(friends.iter().all(|friend| friend.session().is_some()));
    mock.verify();
}

#[tokio::test]
async fn test_friends_with_info_defaults_to_every_field() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2]));
    mock.expect(Method::UsersGetInfo)
        .return_ok(json!([{ "uid": 2, "name": "Bea" }]));

    user.friends_with_info(&[]).await.unwrap();
    assert_eq!(mock.calls()[1].params["fields"], Field::join(&[]));
    mock.verify();
}

/// Unpopulated friends stay as cached when info is requested later.
#[tokio::test]
async fn test_friends_with_info_after_friends_returns_cache() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!([2]));

    user.friends().await.unwrap();
    let friends = user.friends_with_info(&[Field::Name]).await.unwrap();
    assert!(!friends[0].is_populated());
    mock.verify();
}

#[tokio::test]
async fn test_friends_with_this_app_cached_separately() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGetAppUsers).return_ok(json!([5]));

    assert_eq!(user.friends_with_this_app().await.unwrap()[0].id(), Some(5));
    assert_eq!(user.friends_with_this_app().await.unwrap().len(), 1);
    assert_eq!(mock.call_count(Method::FriendsGetAppUsers), 1);
    assert_eq!(mock.call_count(Method::FriendsGet), 0);
    mock.verify();
}

/// The group filter only matters on the first call.
#[tokio::test]
async fn test_groups_cache_ignores_later_filter() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::GroupsGet).return_ok(json!([
        { "gid": "100", "name": "Rustaceans", "venue": { "city": "Berlin" } },
        { "gid": 101, "name": "Climbers", "venue": "" }
    ]));

    let groups = user.groups(&[]).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].gid, Some(100));
    assert_eq!(groups[0].venue.as_ref().unwrap().city.as_deref(), Some("Berlin"));
    assert!(groups[1].venue.is_none());
    assert!(groups.iter().all(|group| group.session.is_some()));

    let filtered = user.groups(&[7]).await.unwrap();
    assert_eq!(filtered.len(), 2);

    assert!(!mock.calls()[0].params.contains_key("gids"));
    assert_eq!(mock.call_count(Method::GroupsGet), 1);
    mock.verify();
}

#[tokio::test]
async fn test_groups_filter_sent_on_first_call() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::GroupsGet).return_ok(json!([{ "gid": 7 }]));

    user.groups(&[7, 8]).await.unwrap();
    assert_eq!(mock.calls()[0].params["gids"], "7,8");
    mock.verify();
}

#[tokio::test]
async fn test_notifications_and_albums_cached() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::NotificationsGet).return_ok(json!({
        "messages": { "unread": 3, "most_recent": 9 },
        "friend_requests": ["4"]
    }));
    mock.expect(Method::PhotosGetAlbums).return_ok(json!([
        { "aid": "34595963571485", "name": "Summer", "size": 12 }
    ]));

    let notifications = user.notifications().await.unwrap();
    assert_eq!(notifications.messages.as_ref().unwrap().unread, Some(3));
    assert_eq!(notifications.friend_requests, vec![4]);
    user.notifications().await.unwrap();

    let albums = user.albums().await.unwrap();
    assert_eq!(albums[0].aid, Some(34595963571485));
    assert_eq!(albums[0].size, Some(12));
    user.albums().await.unwrap();

    assert_eq!(mock.calls()[1].params["uid"], 1);
    assert_eq!(mock.calls().len(), 2);
    mock.verify();
}

#[tokio::test]
async fn test_create_album_not_added_to_albums() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::PhotosGetAlbums).return_ok(json!([{ "aid": 1, "name": "Old" }]));
    mock.expect(Method::PhotosCreateAlbum)
        .return_ok(json!({ "aid": 2, "name": "New", "location": "Paris" }));

    user.albums().await.unwrap();
    let created = user
        .create_album(params! { "name" => "New", "location" => "Paris" })
        .await
        .unwrap();
    assert_eq!(created.aid, Some(2));
    assert_eq!(mock.calls()[1].params["name"], "New");

    assert_eq!(user.last_created_album().unwrap().name.as_deref(), Some("New"));
    assert_eq!(user.albums().await.unwrap().len(), 1);
    mock.verify();
}

/// Profile markup is a pass-through; every read hits the remote side.
#[tokio::test]
async fn test_profile_fbml_not_cached() {
    let (user, mock) = user_with_mock(8);
    mock.expect(Method::ProfileGetFbml).return_ok(json!("<b>one</b>"));
    mock.expect(Method::ProfileSetFbml).return_ok(json!("1"));
    mock.expect(Method::ProfileGetFbml).return_ok(json!("<b>two</b>"));

    assert_eq!(user.profile_fbml().await.unwrap(), json!("<b>one</b>"));
    assert_eq!(user.set_profile_fbml("<b>two</b>").await.unwrap(), json!("1"));
    assert_eq!(user.profile_fbml().await.unwrap(), json!("<b>two</b>"));

    let calls = mock.calls();
    assert_eq!(calls[0].params["uid"], 8);
    assert_eq!(calls[1].params["markup"], "<b>two</b>");
    mock.verify();
}

/// Publishing succeeds only on the literal string "1".
#[tokio::test]
async fn test_publish_requires_literal_one() {
    let (user, mock) = user_with_mock(1);
    mock.expect(Method::FeedPublishStoryToUser).return_ok(json!("1"));
    mock.expect(Method::FeedPublishStoryToUser).return_ok(json!(1));
    mock.expect(Method::FeedPublishActionOfUser).return_ok(json!("0"));
    mock.expect(Method::FeedPublishActionOfUser).return_ok(json!("1"));
    mock.expect(Method::FeedPublishTemplatizedAction).return_ok(json!("1"));

    let mut story = Story::new("Shipped it");
    story.images.push(FeedImage::new("http://img/a.png").with_link("http://a"));
    assert!(user.publish_story(story.clone()).await.unwrap());
    assert!(!user.publish_story(story).await.unwrap());

    assert!(!user.publish_action(Action::new("Ran")).await.unwrap());
    assert!(user.publish_action(Action::new("Ran again")).await.unwrap());
    assert!(user
        .publish_templatized_action(TemplatizedAction::new("{actor} waved"))
        .await
        .unwrap());

    let calls = mock.calls();
    assert_eq!(calls[0].params["title"], "Shipped it");
    assert_eq!(calls[0].params["image_1_link"], "http://a");
    assert_eq!(calls[4].params["title_template"], "{actor} waved");
    mock.verify();
}

/// Transport failures reach the caller unchanged and nothing is cached.
#[tokio::test]
async fn test_transport_errors_propagate() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet)
        .return_err(SessionError::Remote { code: 102, message: "Session key invalid".into() });
    mock.expect(Method::FriendsGet).return_ok(json!([4]));

    let err = user.friends().await.unwrap_err();
    assert_eq!(
        err,
        UserError::Session(SessionError::Remote { code: 102, message: "Session key invalid".into() })
    );

    // Failed fetches leave the cache empty, so the next call retries.
    assert_eq!(user.friends().await.unwrap().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_malformed_list_response() {
    let (mut user, mock) = user_with_mock(1);
    mock.expect(Method::FriendsGet).return_ok(json!({ "error": "nope" }));

    let err = user.friends().await.unwrap_err();
    assert!(matches!(
        err,
        UserError::UnexpectedResponse { method: Method::FriendsGet, .. }
    ));
    mock.verify();
}
