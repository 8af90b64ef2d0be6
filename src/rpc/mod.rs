use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, bounded, select};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::guard::{Decoder, Diagnostics, Encoder, Reflect, Result, TypeDescriptor};

/// Request envelope handed to the network.
#[derive(Debug)]
pub struct RequestMessage {
	/// Name of the sending client end.
	pub end_name: Arc<str>,
	/// Target in `Service.Method` form.
	pub service_method: String,
	/// Descriptor of the encoded argument type.
	pub args_type: TypeDescriptor,
	/// Encoded arguments.
	pub args: Vec<u8>,
	/// Where the network delivers the reply.
	pub reply_tx: Sender<ReplyMessage>,
}

/// Reply envelope delivered back to the caller.
#[derive(Debug, Clone, Default)]
pub struct ReplyMessage {
	/// Whether the server handled the request.
	pub ok: bool,
	/// Encoded reply.
	pub reply: Vec<u8>,
}

/// Client side of one network connection.
pub struct ClientEnd {
	end_name: Arc<str>,
	tx: Sender<RequestMessage>,
	done: Receiver<()>,
	diagnostics: Arc<Diagnostics>,
}

impl RequestMessage {
	/// Encode `args` through the encoding gate into a request; also returns the reply receiver.
	pub fn encode<A: Reflect + Serialize>(
		end_name: Arc<str>,
		service_method: &str,
		args: &A,
		diagnostics: Arc<Diagnostics>,
	) -> Result<(Self, Receiver<ReplyMessage>)> {
		let mut encoder = Encoder::with_diagnostics(Vec::new(), diagnostics);
		encoder.encode(args)?;

		let (reply_tx, reply_rx) = bounded(1);
		let request = Self {
			end_name,
			service_method: service_method.to_owned(),
			args_type: A::descriptor(),
			args: encoder.into_inner(),
			reply_tx,
		};
		Ok((request, reply_rx))
	}
}

impl ReplyMessage {
	/// Decode the reply payload into `dest` through the decoding gate.
	pub fn decode_into<R: Reflect + DeserializeOwned>(&self, dest: &mut R, diagnostics: Arc<Diagnostics>) -> Result<()> {
		Decoder::with_diagnostics(self.reply.as_slice(), diagnostics).decode(dest)?;
		Ok(())
	}
}

impl ClientEnd {
	/// Client end reporting to the process-wide diagnostics context.
	pub fn new(end_name: impl Into<Arc<str>>, tx: Sender<RequestMessage>, done: Receiver<()>) -> Self {
		Self::with_diagnostics(end_name, tx, done, Diagnostics::global())
	}

	/// Client end reporting to an explicit context.
	pub fn with_diagnostics(end_name: impl Into<Arc<str>>, tx: Sender<RequestMessage>, done: Receiver<()>, diagnostics: Arc<Diagnostics>) -> Self {
		Self {
			end_name: end_name.into(),
			tx,
			done,
			diagnostics,
		}
	}

	/// Name this end was created with.
	pub fn end_name(&self) -> &str {
		&self.end_name
	}

	/// Send one request and wait for its reply.
	///
	/// `Ok(false)` means the network is gone or the server did not answer; `reply` is left
	/// untouched in that case.
	pub fn call<A, R>(&self, service_method: &str, args: &A, reply: &mut R) -> Result<bool>
	where
		A: Reflect + Serialize,
		R: Reflect + DeserializeOwned,
	{
		let (request, reply_rx) = RequestMessage::encode(Arc::clone(&self.end_name), service_method, args, Arc::clone(&self.diagnostics))?;
		debug!(end = %self.end_name, service_method, bytes = request.args.len(), "submitting request");

		select! {
			send(self.tx, request) -> sent => {
				if sent.is_err() {
					return Ok(false);
				}
			}
			recv(self.done) -> _ => return Ok(false),
		}

		let Ok(message) = reply_rx.recv() else {
			return Ok(false);
		};
		if !message.ok {
			return Ok(false);
		}

		message.decode_into(reply, Arc::clone(&self.diagnostics))?;
		Ok(true)
	}
}
