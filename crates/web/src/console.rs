//! Console state and the actions bound to the UI.

use estoque::{
    admin::{Admin, AdminError, Refreshed},
    api::HttpTransport,
    builder::{OrderDraft, ProductOption},
    navigation::{Navigator, Section, SectionView},
    notifications::{Confirmation, NoticeId, Notices, Operation, Subject},
    orders::OrderId,
    products::{ProductForm, ProductId},
    views::{
        dashboard::DashboardView,
        orders::{OrderDetailsView, OrdersView},
        products::ProductsView,
        stock::StockView,
    },
};
use leptos::{logging, prelude::*, task};
use rust_decimal::Decimal;

/// Reactive state behind every panel and modal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Screens {
    /// Visible section
    pub(crate) navigator: RwSignal<Navigator>,

    /// Last dashboard load
    pub(crate) dashboard: RwSignal<Option<DashboardView>>,

    /// Last catalog load
    pub(crate) products: RwSignal<Option<ProductsView>>,

    /// Last order list load
    pub(crate) orders: RwSignal<Option<OrdersView>>,

    /// Last stock load
    pub(crate) stock: RwSignal<Option<StockView>>,

    /// Pending notices
    pub(crate) notices: RwSignal<Notices>,

    /// Destructive action awaiting an answer
    pub(crate) confirmation: RwSignal<Option<Confirmation>>,

    /// Open product form
    pub(crate) product_form: RwSignal<Option<ProductForm>>,

    /// Open order builder
    pub(crate) draft: RwSignal<Option<OrderDraft>>,

    /// Product picker options for the order builder
    pub(crate) options: RwSignal<Vec<ProductOption>>,

    /// Open order breakdown
    pub(crate) details: RwSignal<Option<OrderDetailsView>>,
}

impl Screens {
    pub(crate) fn new() -> Self {
        Self {
            navigator: RwSignal::new(Navigator::new()),
            dashboard: RwSignal::new(None),
            products: RwSignal::new(None),
            orders: RwSignal::new(None),
            stock: RwSignal::new(None),
            notices: RwSignal::new(Notices::new()),
            confirmation: RwSignal::new(None),
            product_form: RwSignal::new(None),
            draft: RwSignal::new(None),
            options: RwSignal::new(Vec::new()),
            details: RwSignal::new(None),
        }
    }

    /// Put a freshly loaded section on screen.
    pub(crate) fn show(self, view: SectionView) {
        match view {
            SectionView::Dashboard(view) => self.dashboard.set(Some(view)),
            SectionView::Products(view) => self.products.set(Some(view)),
            SectionView::Orders(view) => self.orders.set(Some(view)),
            SectionView::Stock(view) => self.stock.set(Some(view)),
        }
    }

    /// Log a failure and tell the user about it.
    pub(crate) fn fail(self, error: &AdminError, operation: Operation, subject: Subject) {
        logging::error!("{operation:?} {subject:?} failed: {error}");

        self.notices.update(|notices| {
            notices.error(error.user_message(operation, subject));
        });
    }

    /// Announce a successful mutation and show what was reloaded after it.
    pub(crate) fn apply(self, refreshed: Refreshed, section: Section) {
        self.notices.update(|notices| {
            notices.success(refreshed.message);
        });

        match refreshed.section {
            Ok(view) => self.show(view),
            Err(error) => self.fail(&error, Operation::Load, subject_for(section)),
        }

        match refreshed.dashboard {
            Ok(view) => self.dashboard.set(Some(view)),
            Err(error) => self.fail(&error, Operation::Load, Subject::Dashboard),
        }
    }

    pub(crate) fn dismiss(self, id: NoticeId) {
        self.notices.update(|notices| {
            notices.dismiss(id);
        });
    }
}

/// Subject of a section load.
pub(crate) fn subject_for(section: Section) -> Subject {
    match section {
        Section::Dashboard => Subject::Dashboard,
        Section::Products => Subject::Products,
        Section::Orders => Subject::Orders,
        Section::Stock => Subject::Stock,
    }
}

/// Screens plus the admin facade that feeds them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Console {
    pub(crate) screens: Screens,
    admin: StoredValue<Admin<HttpTransport>, LocalStorage>,
}

impl Console {
    pub(crate) fn new(admin: Admin<HttpTransport>) -> Self {
        Self {
            screens: Screens::new(),
            admin: StoredValue::new_local(admin),
        }
    }

    fn admin(self) -> Admin<HttpTransport> {
        self.admin.get_value()
    }

    /// Format an amount in the console's locale.
    pub(crate) fn format_price(self, amount: Decimal) -> String {
        self.admin
            .with_value(|admin| admin.locale().format_price(amount))
    }

    /// Switch to a section and load it.
    pub(crate) fn navigate(self, section: Section) {
        self.screens.navigator.update(|navigator| navigator.show(section));
        self.load(section);
    }

    pub(crate) fn load(self, section: Section) {
        let admin = self.admin();

        task::spawn_local(async move {
            match admin.load_section(section).await {
                Ok(view) => self.screens.show(view),
                Err(error) => self.screens.fail(&error, Operation::Load, subject_for(section)),
            }
        });
    }

    pub(crate) fn open_product_form(self, product: Option<ProductId>) {
        let form = product
            .and_then(|id| self.admin.with_value(|admin| admin.store().product(id)))
            .map_or_else(ProductForm::blank, |product| ProductForm::edit(&product));

        self.screens.product_form.set(Some(form));
    }

    pub(crate) fn save_product(self) {
        let Some(form) = self.screens.product_form.get_untracked() else {
            return;
        };

        let admin = self.admin();

        task::spawn_local(async move {
            match admin.save_product(&form).await {
                Ok(refreshed) => {
                    self.screens.product_form.set(None);
                    self.screens.apply(refreshed, Section::Products);
                }
                Err(error) => self.screens.fail(&error, Operation::Save, Subject::Product),
            }
        });
    }

    pub(crate) fn open_order_builder(self) {
        let admin = self.admin();

        self.screens.draft.set(Some(OrderDraft::new()));
        self.screens.options.set(admin.product_options());

        task::spawn_local(async move {
            match admin.reload_products().await {
                Ok(_) => self.screens.options.set(admin.product_options()),
                Err(error) => self.screens.fail(&error, Operation::Load, Subject::Products),
            }
        });
    }

    pub(crate) fn submit_order(self) {
        let Some(draft) = self.screens.draft.get_untracked() else {
            return;
        };

        let admin = self.admin();

        task::spawn_local(async move {
            match admin.submit_order(&draft).await {
                Ok(refreshed) => {
                    self.screens.draft.set(None);
                    self.screens.apply(refreshed, Section::Orders);
                }
                Err(error) => self.screens.fail(&error, Operation::Save, Subject::Order),
            }
        });
    }

    pub(crate) fn show_details(self, id: OrderId) {
        let admin = self.admin();

        task::spawn_local(async move {
            match admin.order_details(id).await {
                Ok(details) => self.screens.details.set(Some(details)),
                Err(error) => self.screens.fail(&error, Operation::Load, Subject::Order),
            }
        });
    }

    pub(crate) fn adjust_stock(self, id: ProductId, quantity: String) {
        let admin = self.admin();

        task::spawn_local(async move {
            match admin.adjust_stock(id, &quantity).await {
                Ok(refreshed) => self.screens.apply(refreshed, Section::Stock),
                Err(error) => self.screens.fail(&error, Operation::Update, Subject::Stock),
            }
        });
    }

    /// Run the pending destructive action.
    pub(crate) fn accept_confirmation(self) {
        let Some(confirmation) = self.screens.confirmation.get_untracked() else {
            return;
        };

        self.screens.confirmation.set(None);

        let admin = self.admin();

        task::spawn_local(async move {
            let (result, section, subject) = match confirmation {
                Confirmation::DeleteProduct(id) => (
                    admin.delete_product(id).await,
                    Section::Products,
                    Subject::Product,
                ),
                Confirmation::DeleteOrder(id) => (
                    admin.delete_order(id).await,
                    Section::Orders,
                    Subject::Order,
                ),
            };

            match result {
                Ok(refreshed) => self.screens.apply(refreshed, section),
                Err(error) => self.screens.fail(&error, Operation::Delete, subject),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use estoque::{
        api::ApiError,
        notifications::NoticeLevel,
        prices::DisplayLocale,
        views::stock::StockView,
    };

    use super::*;

    fn refreshed(dashboard: Result<DashboardView, AdminError>) -> Refreshed {
        Refreshed {
            message: "Estoque atualizado com sucesso!",
            section: Ok(SectionView::Stock(StockView::build(
                &[],
                &DisplayLocale::default(),
            ))),
            dashboard,
        }
    }

    #[test]
    fn apply_shows_reloaded_views_and_announces_success() {
        let screens = Screens::new();

        screens.apply(
            refreshed(Ok(DashboardView::build(&[], &[], &DisplayLocale::default()))),
            Section::Stock,
        );

        assert!(screens.stock.get_untracked().is_some(), "stock should be shown");
        assert!(
            screens.dashboard.get_untracked().is_some(),
            "dashboard should be shown"
        );

        let levels: Vec<NoticeLevel> = screens
            .notices
            .get_untracked()
            .iter()
            .map(|notice| notice.level)
            .collect();

        assert_eq!(levels, vec![NoticeLevel::Success]);
    }

    #[test]
    fn failed_dashboard_reload_is_reported() {
        let screens = Screens::new();

        screens.apply(
            refreshed(Err(AdminError::Api(ApiError::Request { status: 502 }))),
            Section::Stock,
        );

        let messages: Vec<String> = screens
            .notices
            .get_untracked()
            .iter()
            .map(|notice| notice.message.clone())
            .collect();

        assert_eq!(
            messages,
            vec![
                "Estoque atualizado com sucesso!".to_string(),
                "Erro ao carregar dados do dashboard".to_string(),
            ]
        );
        assert!(
            screens.dashboard.get_untracked().is_none(),
            "failed dashboard keeps the old view"
        );
    }

    #[test]
    fn dismissed_notices_disappear() {
        let screens = Screens::new();

        screens.fail(
            &AdminError::Validation(estoque::validation::ValidationError::IncompleteOrder),
            Operation::Save,
            Subject::Order,
        );

        let id = screens
            .notices
            .get_untracked()
            .iter()
            .map(|notice| notice.id)
            .next();

        if let Some(id) = id {
            screens.dismiss(id);
        }

        assert!(
            screens.notices.get_untracked().is_empty(),
            "notice should be dismissed"
        );
    }

    #[test]
    fn every_section_has_a_load_subject() {
        assert_eq!(subject_for(Section::Stock), Subject::Stock);
        assert_eq!(subject_for(Section::Dashboard), Subject::Dashboard);
    }
}
