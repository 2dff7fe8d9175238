use multimethodic::{AsyncMultiMethod, Key, testing::RecordingDispatch};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
struct Request {
    method: &'static str,
    path: String,
}

fn request(method: &'static str, path: &str) -> Request {
    Request {
        method,
        path: path.to_string(),
    }
}

#[tokio::test]
async fn test_async_methods_selected_by_value() {
    let mut handle = AsyncMultiMethod::new("handle", |req: &Request| req.method);
    handle
        .method("GET")
        .attach(|req: Request| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            format!("read {}", req.path)
        })
        .method("PUT")
        .attach(|req: Request| async move { format!("wrote {}", req.path) });

    assert_eq!(
        handle.call(request("GET", "/a")).await,
        Ok("read /a".to_string())
    );
    assert_eq!(
        handle.call(request("PUT", "/b")).await,
        Ok("wrote /b".to_string())
    );

    let err = handle.call(request("DELETE", "/c")).await.unwrap_err();
    assert_eq!(err.name(), "handle");
    assert_eq!(*err.discriminant(), "DELETE");

    handle
        .method(Key::Default)
        .attach(|req: Request| async move { format!("unsupported {}", req.method) });
    assert_eq!(
        handle.call(request("DELETE", "/c")).await,
        Ok("unsupported DELETE".to_string())
    );
    assert!(handle.has_default());
}

#[tokio::test]
async fn test_async_dispatch_sees_each_call() {
    let recorder = RecordingDispatch::new();
    let mut mm = AsyncMultiMethod::new("len", recorder.wrap(|s: &String| s.len()));
    mm.add_method(Key::Default, |s: String| async move { s.to_uppercase() });

    assert_eq!(mm.call("ab".to_string()).await, Ok("AB".to_string()));
    assert_eq!(mm.call("ab".to_string()).await, Ok("AB".to_string()));
    assert_eq!(recorder.calls(), vec!["ab".to_string(), "ab".to_string()]);
    assert_eq!(mm.len(), 0);
}
