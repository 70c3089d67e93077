use crate::server::ServerRouter;

mod fibonacci;
mod hackable;
mod posts;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(posts::routes())
        .merge(fibonacci::routes())
        .merge(hackable::routes())
}
