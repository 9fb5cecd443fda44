/// Generate a router async method that picks the first connector advertising a
/// capability and calls it under the configured provider timeout.
///
/// There is no fallback: a capability is owned by exactly one connector, the first
/// one registered that advertises it.
#[macro_export]
macro_rules! dalal_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $( $arg_ident:ident : $arg_ty:ty ),* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident( $( $call_arg:ident ),* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "dalal::router", skip(self))
        )]
        ///
        /// # Errors
        /// Returns `Unsupported` when no registered connector advertises the capability,
        /// `ProviderTimeout` when the call outlives the configured timeout, and the
        /// connector's own error otherwise.
        pub async fn $name(
            &self,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, dalal_core::DalalError> {
            for c in &self.connectors {
                if let Some(p) = c.$accessor() {
                    return $crate::Dalal::provider_call_with_timeout(
                        c.name(),
                        $capability,
                        self.cfg.provider_timeout,
                        p.$call_name($( $call_arg ),*),
                    )
                    .await;
                }
            }
            Err(dalal_core::DalalError::unsupported($capability.as_str()))
        }
    };
}
