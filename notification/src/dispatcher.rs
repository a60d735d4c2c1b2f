//! Best-effort notification dispatch.

use crate::channel::CHANNELS_MIN_API_LEVEL;
use crate::config::NotifyConfig;
use crate::diagnostics::{Diagnostic, Diagnostics, ImagePurpose};
use crate::host::{NotificationHost, Priority, Style};
use crate::id::{IdSource, NotificationId, RandomIds};
use crate::request::NotificationRequest;
use crate::resolve::{ImageUri, insert_small_icon, resolve_app_icon_bitmap, resolve_optional};
use crate::style::TextStyle;
use droidnotify_permission::{Permission, PermissionGate};

/// Result of a send, including everything that was downgraded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Id the notification was posted under; `None` only when the platform is
    /// unsupported.
    pub id: Option<NotificationId>,
    /// Failures that were caught and logged, in the order they happened.
    pub diagnostics: Vec<Diagnostic>,
}

/// Posts notifications through a [`NotificationHost`].
///
/// A send never fails once the platform check passes: broken images, styles
/// or icons are dropped and reported in [`SendOutcome::diagnostics`], and the
/// caller always gets an id back.
#[derive(Debug)]
pub struct Dispatcher<H, G, I = RandomIds> {
    config: NotifyConfig,
    host: H,
    gate: G,
    ids: I,
}

impl<H, G> Dispatcher<H, G>
where
    H: NotificationHost,
    G: PermissionGate,
{
    /// Create a dispatcher drawing random ids.
    pub const fn new(config: NotifyConfig, host: H, gate: G) -> Self {
        Self {
            config,
            host,
            gate,
            ids: RandomIds,
        }
    }
}

impl<H, G, I> Dispatcher<H, G, I>
where
    H: NotificationHost,
    G: PermissionGate,
    I: IdSource,
{
    /// Replace the id source.
    pub fn with_ids<J: IdSource>(self, ids: J) -> Dispatcher<H, G, J> {
        Dispatcher {
            config: self.config,
            host: self.host,
            gate: self.gate,
            ids,
        }
    }

    /// The host this dispatcher drives.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The permission gate consulted before each send.
    pub const fn gate(&self) -> &G {
        &self.gate
    }

    /// The active configuration.
    pub const fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Post `request` and return its id, or `None` when not on Android.
    pub fn send(&self, request: &NotificationRequest) -> Option<NotificationId> {
        self.send_with_diagnostics(request).id
    }

    /// Post `request` and report what was downgraded on the way.
    pub fn send_with_diagnostics(&self, request: &NotificationRequest) -> SendOutcome {
        let mut diagnostics = Diagnostics::default();

        if !self.config.platform_supported {
            diagnostics.record(Diagnostic::PlatformUnsupported);
            return SendOutcome {
                id: None,
                diagnostics: diagnostics.into_vec(),
            };
        }

        if let Err(err) = self.gate.ensure_permission(Permission::PostNotifications) {
            diagnostics.record(Diagnostic::PermissionRequest(err.to_string()));
        }

        let channel = request.channel();
        if self.host.api_level() >= CHANNELS_MIN_API_LEVEL {
            if let Err(err) = self.host.create_channel(&channel) {
                diagnostics.record(Diagnostic::Channel {
                    channel_id: channel.id.clone(),
                    message: err.to_string(),
                });
            }
        }

        let builder = self.build(request, &channel.id, &mut diagnostics);

        let id = self.ids.next_id();
        if let Some(builder) = builder {
            match self.host.notify(id, builder) {
                Ok(()) => log::debug!("posted notification {id} on channel `{}`", channel.id),
                Err(err) => diagnostics.record(Diagnostic::Delivery(err.to_string())),
            }
        }

        SendOutcome {
            id: Some(id),
            diagnostics: diagnostics.into_vec(),
        }
    }

    fn build(
        &self,
        request: &NotificationRequest,
        channel_id: &str,
        diagnostics: &mut Diagnostics,
    ) -> Option<H::Builder> {
        let mut builder = match self.host.new_builder(channel_id) {
            Ok(builder) => builder,
            Err(err) => {
                diagnostics.record(Diagnostic::Delivery(err.to_string()));
                return None;
            }
        };

        if let Err(err) = self
            .host
            .set_content(&mut builder, request.title(), request.message())
        {
            diagnostics.record(Diagnostic::Builder(err.to_string()));
        }

        let app_root = self.host.app_root();
        insert_small_icon(
            &self.host,
            &mut builder,
            &app_root,
            request.custom_app_icon_path(),
            diagnostics,
        );

        if let Err(err) = self.host.set_alerts(&mut builder, Priority::High) {
            diagnostics.record(Diagnostic::Builder(err.to_string()));
        }

        for deprecation in request.deprecations() {
            diagnostics.record(deprecation);
        }

        let big_picture = resolve_optional(
            &app_root,
            request.big_picture_path(),
            ImagePurpose::BigPicture,
            diagnostics,
        );
        let large_icon = resolve_optional(
            &app_root,
            request.large_icon_path(),
            ImagePurpose::LargeIcon,
            diagnostics,
        );

        if let Some(style) = TextStyle::select(request) {
            if let Err(err) = self.host.set_style(&mut builder, style.as_style()) {
                diagnostics.record(Diagnostic::StyleApplication(err.to_string()));
            }
        }

        self.apply_large_icon(&mut builder, large_icon.as_ref(), diagnostics);

        if let Some(uri) = big_picture {
            self.apply_big_picture(&mut builder, &uri, diagnostics);
        }

        Some(builder)
    }

    fn apply_large_icon(
        &self,
        builder: &mut H::Builder,
        explicit: Option<&ImageUri>,
        diagnostics: &mut Diagnostics,
    ) {
        let decoded = explicit.and_then(|uri| match self.host.decode_bitmap(uri) {
            Ok(bitmap) => Some(bitmap),
            Err(err) => {
                diagnostics.record(Diagnostic::IconDecode(format!("{uri}: {err}")));
                None
            }
        });

        let Some(bitmap) = decoded.or_else(|| resolve_app_icon_bitmap(&self.host, diagnostics))
        else {
            log::debug!("no large icon available, posting without one");
            return;
        };

        if let Err(err) = self.host.set_large_icon(builder, &bitmap) {
            diagnostics.record(Diagnostic::IconDecode(format!("large icon: {err}")));
        }
    }

    fn apply_big_picture(
        &self,
        builder: &mut H::Builder,
        uri: &ImageUri,
        diagnostics: &mut Diagnostics,
    ) {
        let applied = self
            .host
            .decode_bitmap(uri)
            .and_then(|bitmap| self.host.set_style(builder, Style::BigPicture(&bitmap)));
        if let Err(err) = applied {
            diagnostics.record(Diagnostic::StyleApplication(format!("big picture {uri}: {err}")));
        }
    }
}

/// Post `request` with a dispatcher configured for the current platform.
pub fn send<H, G>(host: H, gate: G, request: &NotificationRequest) -> Option<NotificationId>
where
    H: NotificationHost,
    G: PermissionGate,
{
    Dispatcher::new(NotifyConfig::detect(), host, gate).send(request)
}
