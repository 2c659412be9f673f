use crate::routes::Route;

/// Class names the stylesheet targets.
pub mod class {
    pub const ROOT: &str = "custom-home";
    pub const HERO_SECTION: &str = "hero-section";
    pub const SUBTITLE: &str = "subtitle";
    pub const QUICK_ACTIONS: &str = "quick-actions";
    pub const ACTION_CARD: &str = "action-card";
    pub const CARD_ICON: &str = "card-icon";
    pub const FEATURES_SECTION: &str = "features-section";
    pub const FEATURES_GRID: &str = "features-grid";
    pub const FEATURE_ITEM: &str = "feature-item";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Clickable tile linking to an application route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationCard {
    pub route: Route,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Non-interactive tile describing a product capability
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO: Hero = Hero {
    title: "欢迎使用 Kubeapps",
    subtitle: "简化 Kubernetes 应用管理",
};

pub const FEATURES_HEADING: &str = "核心功能";

pub const NAVIGATION_CARDS: [NavigationCard; 4] = [
    NavigationCard {
        route: Route::Catalog,
        icon: "📦",
        title: "浏览应用",
        description: "从应用目录中选择并部署应用",
    },
    NavigationCard {
        route: Route::Apps,
        icon: "🚀",
        title: "我的应用",
        description: "查看和管理已部署的应用",
    },
    NavigationCard {
        route: Route::RepositoryConfig,
        icon: "🔧",
        title: "仓库管理",
        description: "配置和管理应用仓库",
    },
    NavigationCard {
        route: Route::Operators,
        icon: "⚙️",
        title: "Operators",
        description: "浏览和安装 Kubernetes Operators",
    },
];

pub const FEATURE_ITEMS: [FeatureItem; 4] = [
    FeatureItem {
        title: "多包管理器支持",
        description: "支持 Helm、Flux、Carvel 等多种包管理器",
    },
    FeatureItem {
        title: "GitOps 工作流",
        description: "原生支持 Flux GitOps 声明式部署",
    },
    FeatureItem {
        title: "多集群管理",
        description: "统一管理多个 Kubernetes 集群",
    },
    FeatureItem {
        title: "RBAC 集成",
        description: "基于 Kubernetes RBAC 的权限控制",
    },
];

/// Everything the landing page shows, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeLayout {
    pub hero: Hero,
    pub cards: &'static [NavigationCard],
    pub features_heading: &'static str,
    pub features: &'static [FeatureItem],
}

pub fn home_layout() -> HomeLayout {
    HomeLayout {
        hero: HERO,
        cards: &NAVIGATION_CARDS,
        features_heading: FEATURES_HEADING,
        features: &FEATURE_ITEMS,
    }
}
