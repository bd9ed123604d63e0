#![no_main]
use http::Method;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(bool, String, i32)>, bool, String)| {
    let method = |post: bool| if post { Method::POST } else { Method::GET };

    let table = pathmux::Table::compile(
        data.0
            .into_iter()
            .map(|(post, pattern, value)| pathmux::Route::new(method(post), pattern, value)),
    );

    match table.at(&method(data.1), &data.2) {
        Ok(matched) => assert!(matched.params.iter().all(|(_, value)| !value.is_empty())),
        Err(pathmux::MatchError::MethodNotAllowed) => assert!(!table.allowed(&data.2).is_empty()),
        Err(pathmux::MatchError::NotFound) => {}
    }
});
