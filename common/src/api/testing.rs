//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiReply, ApiRequest, Transport};
use crate::error::ApiError;

/// Records every request and answers from a queue of canned replies.
#[derive(Default)]
pub(crate) struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiReply, ApiError>>>,
}

impl FakeTransport {
    pub(crate) fn new(replies: impl IntoIterator<Item = Result<ApiReply, ApiError>>) -> Self {
        Self {
            requests: RefCell::default(),
            replies: RefCell::new(replies.into_iter().collect()),
        }
    }

    pub(crate) fn replying(replies: impl IntoIterator<Item = ApiReply>) -> Self {
        Self::new(replies.into_iter().map(Ok))
    }

    pub(crate) fn push(&self, reply: Result<ApiReply, ApiError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {path}"))
    }
}
