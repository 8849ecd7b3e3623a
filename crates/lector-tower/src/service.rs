use tower::Service;

/// Swaps a fresh clone into `src` and hands back the instance that was
/// driven to readiness.
///
/// See <https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services>
pub fn replace_ready_service<S, T>(src: &mut S) -> S
where
    S: Service<T> + Clone,
{
    let clone = src.clone();
    std::mem::replace(src, clone)
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    use tower::{service_fn, Service, ServiceExt};

    use super::replace_ready_service;

    #[tokio::test]
    async fn replaced_service_still_answers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut service = service_fn(move |value: usize| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(value * 2)
            }
        });

        ServiceExt::<usize>::ready(&mut service).await.unwrap();
        let mut ready = replace_ready_service::<_, usize>(&mut service);

        assert_eq!(ready.call(4).await.unwrap(), 8);
        assert_eq!(service.call(5).await.unwrap(), 10);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
